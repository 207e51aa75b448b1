// Copyright (c) Sienna Satterwhite, CesiumDB Contributors
// SPDX-License-Identifier: GPL-3.0-only WITH Classpath-exception-2.0

//! A skiplist implementation which allows faster random access than a standard
//! linked list.
//!
//! SkipLists use a probabilistic distribution of nodes over the internal
//! levels, whereby the lowest level (level 0) contains all the nodes, and each
//! level `n > 0` will contain a random subset of the nodes on level `n - 1`.
//!
//! Most commonly, a geometric distribution is used whereby the chance that a
//! node occupies level `n` is `p` times the chance of occupying level `n-1`
//! (with `0 < p < 1`). The default is a fair coin, `p = 0.5`.
//!
//! Nodes live in an arena owned by the list and link to each other by index,
//! so there is no shared mutable aliasing. The sentinel head is not part of
//! the arena; it is just the list's own row of `max_level` forward slots.
//!
//! Duplicates are kept. An equal value is spliced in front of the existing
//! run of equal values, and [`SkipList::search`] and [`SkipList::delete`]
//! always act on the first node of that run.

mod level_generator;
mod node;

use std::{
    fmt,
    iter::FusedIterator,
};

use tracing::{
    debug,
    instrument,
    trace,
};

pub use self::{
    level_generator::{
        GeometricalLevelGenerator,
        LevelGenerator,
    },
    node::NodeRef,
};
use self::node::{
    NodeIdx,
    SkipNode,
    Slot,
};
use crate::{
    config::{
        DEFAULT_MAX_LEVEL,
        DEFAULT_PROBABILITY,
    },
    errs::SkipListError,
};

/// An ordered, probabilistically balanced list. Insert, search, and delete run
/// in expected `O(log n)`.
pub struct SkipList<T, G = GeometricalLevelGenerator> {
    /// Forward slots of the sentinel head, one per level.
    head: Vec<Option<NodeIdx>>,
    nodes: Vec<Slot<T>>,
    free: Vec<NodeIdx>,
    len: usize,
    generator: G,
}

impl<T: Ord> SkipList<T> {
    /// Creates an empty list whose towers are at most `max_level` high.
    ///
    /// # Panics
    ///
    /// Panics if `max_level` is zero. Use [`SkipList::try_new`] to get an
    /// error instead.
    pub fn new(max_level: usize) -> Self {
        match Self::try_new(max_level) {
            | Ok(list) => list,
            | Err(e) => panic!("{}", e),
        }
    }

    /// Creates an empty list, failing if `max_level` is zero.
    pub fn try_new(max_level: usize) -> Result<Self, SkipListError> {
        let generator = GeometricalLevelGenerator::try_new(max_level, DEFAULT_PROBABILITY)?;
        SkipList::with_generator(generator)
    }
}

impl<T: Ord> Default for SkipList<T> {
    fn default() -> Self {
        SkipList::new(DEFAULT_MAX_LEVEL)
    }
}

impl<T, G> SkipList<T, G>
where
    T: Ord,
    G: LevelGenerator,
{
    /// Creates an empty list that draws tower heights from `generator`. The
    /// list's max level is `generator.total()`.
    pub fn with_generator(generator: G) -> Result<Self, SkipListError> {
        let max_level = generator.total();
        if max_level == 0 {
            return Err(SkipListError::InvalidMaxLevel(max_level));
        }
        debug!(max_level, "created skip list");

        Ok(SkipList {
            head: vec![None; max_level],
            nodes: Vec::new(),
            free: Vec::new(),
            len: 0,
            generator,
        })
    }

    /// Inserts `value`. Equal values are never merged: the new node lands
    /// directly before any existing run of equal values.
    #[instrument(level = "trace", skip_all)]
    pub fn insert(&mut self, value: T) {
        let update = self.find_predecessors(&value);

        let drawn = self.generator.random();
        debug_assert!(
            (1..=self.max_level()).contains(&drawn),
            "level generator returned {}",
            drawn
        );
        let level = drawn.clamp(1, self.max_level());

        let forward = update
            .iter()
            .take(level)
            .enumerate()
            .map(|(i, pred)| self.forward(*pred, i))
            .collect();
        let idx = self.allocate(SkipNode::new(value, forward));

        for (i, pred) in update.iter().take(level).enumerate() {
            self.set_forward(*pred, i, Some(idx));
        }

        self.len += 1;
        trace!(level, len = self.len, "inserted node");
    }

    /// Finds the first node holding `value`.
    #[instrument(level = "trace", skip_all)]
    pub fn search(&self, value: &T) -> Option<NodeRef<'_, T>> {
        let mut current = None;
        for level in (0..self.max_level()).rev() {
            current = self.advance(current, level, value);
        }

        let candidate = self.forward(current, 0)?;
        if self.node(candidate).value == *value {
            NodeRef::at(&self.nodes, candidate)
        } else {
            None
        }
    }

    /// Returns `true` if at least one node holds `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.search(value).is_some()
    }

    /// Unlinks the first node holding `value`. Returns `false`, without
    /// touching the list, when there is no such node.
    pub fn delete(&mut self, value: &T) -> bool {
        self.remove(value).is_some()
    }

    /// Unlinks the first node holding `value` and hands back its element.
    #[instrument(level = "trace", skip_all)]
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let update = self.find_predecessors(value);

        let target = match self.forward(update[0], 0) {
            | Some(idx) if self.node(idx).value == *value => idx,
            | _ => {
                trace!(len = self.len, "delete missed");
                return None;
            },
        };

        for (level, pred) in update.iter().enumerate().take(self.node(target).level()) {
            // the target's tower ends below this level
            if self.forward(*pred, level) != Some(target) {
                break;
            }
            let next = self.node(target).forward[level];
            self.set_forward(*pred, level, next);
        }

        let node = self.release(target);
        self.len -= 1;
        trace!(level = node.level(), len = self.len, "deleted node");
        Some(node.value)
    }

    /// The smallest element, if any.
    pub fn first(&self) -> Option<&T> {
        self.head[0].map(|idx| &self.node(idx).value)
    }

    /// The largest element, if any. When the largest value is duplicated this
    /// is the last copy.
    pub fn last(&self) -> Option<&T> {
        let mut current = None;
        for level in (0..self.max_level()).rev() {
            while let Some(next) = self.forward(current, level) {
                current = Some(next);
            }
        }
        current.map(|idx| &self.node(idx).value)
    }
}

impl<T, G> SkipList<T, G> {
    /// The number of elements, i.e. nodes reachable on level 0.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Upper bound on any tower height.
    #[inline]
    pub fn max_level(&self) -> usize {
        self.head.len()
    }

    /// Height of the tallest tower currently in the list, `0` when empty.
    pub fn height(&self) -> usize {
        self.head
            .iter()
            .rposition(Option::is_some)
            .map_or(0, |top| top + 1)
    }

    /// Drops every element. The max level and level generator are kept.
    pub fn clear(&mut self) {
        self.head.fill(None);
        self.nodes.clear();
        self.free.clear();
        self.len = 0;
    }

    /// Iterates the elements in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            slots: &self.nodes,
            next: self.head[0],
            remaining: self.len,
        }
    }

    #[inline]
    fn node(&self, idx: NodeIdx) -> &SkipNode<T> {
        match &self.nodes[idx] {
            | Some(node) => node,
            | None => unreachable!("slot {} is linked but vacant", idx),
        }
    }

    #[inline]
    fn node_mut(&mut self, idx: NodeIdx) -> &mut SkipNode<T> {
        match &mut self.nodes[idx] {
            | Some(node) => node,
            | None => unreachable!("slot {} is linked but vacant", idx),
        }
    }

    /// The successor of `at` on `level`, where `None` stands for the head.
    #[inline]
    fn forward(&self, at: Option<NodeIdx>, level: usize) -> Option<NodeIdx> {
        match at {
            | None => self.head[level],
            | Some(idx) => self.node(idx).forward[level],
        }
    }

    #[inline]
    fn set_forward(&mut self, at: Option<NodeIdx>, level: usize, to: Option<NodeIdx>) {
        match at {
            | None => self.head[level] = to,
            | Some(idx) => self.node_mut(idx).forward[level] = to,
        }
    }

    fn allocate(&mut self, node: SkipNode<T>) -> NodeIdx {
        match self.free.pop() {
            | Some(idx) => {
                self.nodes[idx] = Some(node);
                idx
            },
            | None => {
                self.nodes.push(Some(node));
                self.nodes.len() - 1
            },
        }
    }

    fn release(&mut self, idx: NodeIdx) -> SkipNode<T> {
        match self.nodes[idx].take() {
            | Some(node) => {
                self.free.push(idx);
                node
            },
            | None => unreachable!("slot {} released twice", idx),
        }
    }
}

impl<T: Ord, G> SkipList<T, G> {
    /// Moves right along `level` while the next value is strictly less than
    /// `value`, returning the last node visited.
    #[inline]
    fn advance(&self, mut current: Option<NodeIdx>, level: usize, value: &T) -> Option<NodeIdx> {
        while let Some(next) = self.forward(current, level) {
            if self.node(next).value < *value {
                current = Some(next);
            } else {
                break;
            }
        }
        current
    }

    /// The update list: for every level, the last node whose value is
    /// strictly less than `value`, or `None` for the head.
    fn find_predecessors(&self, value: &T) -> Vec<Option<NodeIdx>> {
        let mut update = vec![None; self.max_level()];
        let mut current = None;
        for level in (0..self.max_level()).rev() {
            current = self.advance(current, level, value);
            update[level] = current;
        }
        update
    }

    /// Checks every structural invariant, panicking on the first violation.
    #[cfg(test)]
    pub(crate) fn assert_invariants(&self) {
        for level in 0..self.max_level() {
            let mut prev: Option<NodeIdx> = None;
            let mut cursor = self.head[level];
            while let Some(idx) = cursor {
                let node = self.node(idx);
                assert!(node.level() > level, "node {} linked above its tower", idx);
                assert!(node.level() <= self.max_level());
                if let Some(p) = prev {
                    assert!(
                        self.node(p).value <= node.value,
                        "level {} is out of order",
                        level
                    );
                }
                prev = cursor;
                cursor = node.forward[level];
            }
        }

        let mut reachable = 0;
        let mut cursor = self.head[0];
        while let Some(idx) = cursor {
            let node = self.node(idx);
            // every level of the tower is linked
            for level in 1..node.level() {
                let mut probe = self.head[level];
                while probe.is_some() && probe != Some(idx) {
                    probe = self.forward(probe, level);
                }
                assert_eq!(probe, Some(idx), "node {} missing from level {}", idx, level);
            }
            reachable += 1;
            cursor = node.forward[0];
        }
        assert_eq!(reachable, self.len, "len disagrees with level 0");
        assert_eq!(
            self.nodes.iter().filter(|slot| slot.is_some()).count(),
            self.len,
            "arena holds unlinked nodes"
        );
    }
}

impl<T: fmt::Debug, G> fmt::Debug for SkipList<T, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Ord> FromIterator<T> for SkipList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = SkipList::default();
        list.extend(iter);
        list
    }
}

impl<T: Ord, G: LevelGenerator> Extend<T> for SkipList<T, G> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T, G> IntoIterator for &'a SkipList<T, G> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order iterator over a [`SkipList`], following level 0.
pub struct Iter<'a, T> {
    slots: &'a [Slot<T>],
    next: Option<NodeIdx>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.slots.get(self.next?)?.as_ref()?;
        self.next = node.forward[0];
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
