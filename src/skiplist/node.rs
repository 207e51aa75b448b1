// Copyright (c) Sienna Satterwhite, CesiumDB Contributors
// SPDX-License-Identifier: GPL-3.0-only WITH Classpath-exception-2.0

use std::{
    fmt,
    ptr,
};

/// Position of a node inside the list's arena.
pub(crate) type NodeIdx = usize;

/// A node owned by the arena. `forward[i]` is the next node on level `i`, so a
/// node's tower covers levels `0..forward.len()` contiguously.
#[derive(Debug)]
pub(crate) struct SkipNode<T> {
    pub(crate) value: T,
    pub(crate) forward: Vec<Option<NodeIdx>>,
}

impl<T> SkipNode<T> {
    pub(crate) fn new(value: T, forward: Vec<Option<NodeIdx>>) -> Self {
        debug_assert!(!forward.is_empty(), "a node must own at least one level");
        SkipNode { value, forward }
    }

    #[inline]
    pub(crate) fn level(&self) -> usize {
        self.forward.len()
    }
}

/// Arena slot. `None` marks a freed slot waiting for reuse.
pub(crate) type Slot<T> = Option<SkipNode<T>>;

/// A read-only view of a node returned by [`SkipList::search`].
///
/// The view borrows the list, so it can't outlive the next structural
/// mutation. Two views are equal when they point at the same node, not when
/// their values are equal.
///
/// [`SkipList::search`]: crate::SkipList::search
pub struct NodeRef<'a, T> {
    slots: &'a [Slot<T>],
    node: &'a SkipNode<T>,
    idx: NodeIdx,
}

impl<'a, T> NodeRef<'a, T> {
    pub(crate) fn at(slots: &'a [Slot<T>], idx: NodeIdx) -> Option<Self> {
        let node = slots.get(idx)?.as_ref()?;
        Some(NodeRef { slots, node, idx })
    }

    /// The stored element.
    #[inline]
    pub fn value(&self) -> &'a T {
        &self.node.value
    }

    /// Height of this node's tower.
    #[inline]
    pub fn level(&self) -> usize {
        self.node.level()
    }

    /// The successor on level 0.
    pub fn next(&self) -> Option<NodeRef<'a, T>> {
        self.next_at(0)
    }

    /// The successor on `level`, or `None` if this node is the last one on
    /// that level or doesn't reach it.
    pub fn next_at(&self, level: usize) -> Option<NodeRef<'a, T>> {
        let next = (*self.node.forward.get(level)?)?;
        NodeRef::at(self.slots, next)
    }
}

impl<T> Clone for NodeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<'_, T> {}

impl<T> PartialEq for NodeRef<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.idx == other.idx && ptr::eq(self.slots.as_ptr(), other.slots.as_ptr())
    }
}

impl<T> Eq for NodeRef<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for NodeRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("value", &self.node.value)
            .field("level", &self.level())
            .finish()
    }
}
