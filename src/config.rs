// Copyright (c) Sienna Satterwhite, CesiumDB Contributors
// SPDX-License-Identifier: GPL-3.0-only WITH Classpath-exception-2.0

use getset::{
    CopyGetters,
    Setters,
};

use crate::{
    errs::SkipListError,
    skiplist::{
        GeometricalLevelGenerator,
        SkipList,
    },
};

/// The default upper bound on tower height. Enough for about 2^16 elements
/// before search depth starts to degrade.
pub const DEFAULT_MAX_LEVEL: usize = 16;

/// A fair coin. Changing this changes the expected search depth constant.
pub const DEFAULT_PROBABILITY: f64 = 0.5;

/// The options used to build a [`SkipList`].
#[derive(Debug, Clone, Copy, PartialEq, CopyGetters, Setters)]
#[getset(get_copy = "pub", set = "pub")]
pub struct SkipListConfig {
    /// The maximum tower height any node can reach.
    max_level: usize,
    /// The chance a tower grows one more level.
    probability: f64,
    /// Seed for the level generator. `None` seeds from OS entropy.
    seed: Option<u64>,
}

impl SkipListConfig {
    pub fn new() -> Self {
        Self {
            max_level: DEFAULT_MAX_LEVEL,
            probability: DEFAULT_PROBABILITY,
            seed: None,
        }
    }

    pub fn build<T: Ord>(&self) -> Result<SkipList<T>, SkipListError> {
        let generator = match self.seed {
            | Some(seed) => {
                GeometricalLevelGenerator::with_seed(self.max_level, self.probability, seed)?
            },
            | None => GeometricalLevelGenerator::try_new(self.max_level, self.probability)?,
        };
        SkipList::with_generator(generator)
    }
}

impl Default for SkipListConfig {
    fn default() -> Self {
        SkipListConfig::new()
    }
}
