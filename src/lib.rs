// Copyright (c) Sienna Satterwhite, CesiumDB Contributors
// SPDX-License-Identifier: GPL-3.0-only WITH Classpath-exception-2.0

//! An arena-backed [`skip list`]: an ordered sequence with expected
//! `O(log n)` insert, search, and delete.
//!
//! ```
//! use skiplist_algo::SkipList;
//!
//! let mut list = SkipList::new(16);
//! list.insert("978-3-16-148410-0");
//! list.insert("978-1-4028-9462-6");
//!
//! let first = list.search(&"978-1-4028-9462-6").unwrap();
//! assert_eq!(first.next().map(|n| *n.value()), Some("978-3-16-148410-0"));
//! assert!(list.delete(&"978-3-16-148410-0"));
//! assert_eq!(list.len(), 1);
//! ```
//!
//! [`skip list`]: https://en.wikipedia.org/wiki/Skip_list

/// Builder-style options for a [`SkipList`].
pub mod config;
pub mod errs;
/// A lock-guarded handle for sharing a list between threads.
pub mod shared;
pub mod skiplist;

pub use crate::{
    config::SkipListConfig,
    errs::SkipListError,
    shared::SharedSkipList,
    skiplist::{
        GeometricalLevelGenerator,
        Iter,
        LevelGenerator,
        NodeRef,
        SkipList,
    },
};
