// Copyright (c) Sienna Satterwhite, CesiumDB Contributors
// SPDX-License-Identifier: GPL-3.0-only WITH Classpath-exception-2.0

use std::sync::Arc;

use parking_lot::Mutex;

use crate::skiplist::SkipList;

/// A [`SkipList`] behind one exclusive lock so it can be shared across
/// threads.
///
/// Splicing a node touches several levels non-atomically, so every
/// operation, reads included, takes the whole-list lock.
pub struct SharedSkipList<T> {
    inner: Arc<Mutex<SkipList<T>>>,
}

impl<T: Ord> SharedSkipList<T> {
    pub fn new(list: SkipList<T>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(list)),
        }
    }

    pub fn insert(&self, value: T) {
        self.inner.lock().insert(value)
    }

    pub fn contains(&self, value: &T) -> bool {
        self.inner.lock().contains(value)
    }

    pub fn delete(&self, value: &T) -> bool {
        self.inner.lock().delete(value)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Runs `f` with the lock held, for anything that needs more than one
    /// call to stay consistent.
    pub fn with<R>(&self, f: impl FnOnce(&mut SkipList<T>) -> R) -> R {
        f(&mut self.inner.lock())
    }
}

impl<T: Ord> Default for SharedSkipList<T> {
    fn default() -> Self {
        SharedSkipList::new(SkipList::default())
    }
}

impl<T> Clone for SharedSkipList<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}
