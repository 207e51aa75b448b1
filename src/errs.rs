// Copyright (c) Sienna Satterwhite, CesiumDB Contributors
// SPDX-License-Identifier: GPL-3.0-only WITH Classpath-exception-2.0

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum SkipListError {
    #[error("max level must be at least 1, got {0}")]
    InvalidMaxLevel(usize),
    #[error("promotion probability must be in (0, 1), got {0}")]
    InvalidProbability(f64),
}
