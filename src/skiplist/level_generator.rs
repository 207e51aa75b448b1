// Copyright (c) Sienna Satterwhite, CesiumDB Contributors
// SPDX-License-Identifier: GPL-3.0-only WITH Classpath-exception-2.0

use rand::{
    rngs::SmallRng,
    Rng,
    SeedableRng,
};

use crate::errs::SkipListError;

/// Upon the insertion of a new node in the list, the node is replicated to high
/// levels with a certain probability as determined by a `LevelGenerator`.
pub trait LevelGenerator {
    /// The total number of levels that are assumed to exist for this level
    /// generator.
    fn total(&self) -> usize;
    /// Generate a tower height for a new node in the range `[1, total]`.
    ///
    /// This must never return `0` or a level that is `> self.total()`.
    fn random(&mut self) -> usize;
}

/// A level generator which will produce geometrically distributed numbers.
///
/// Every node starts with a tower of height 1 and keeps growing while a biased
/// coin lands on `p`, capped at `total`. With `p = 0.5` the expected search
/// depth is `O(log n)`.
#[derive(Debug, Clone)]
pub struct GeometricalLevelGenerator {
    total: usize,
    p: f64,
    rng: SmallRng, // Fast generator
}

impl GeometricalLevelGenerator {
    /// Create a new GeometricalLevelGenerator with `total` number of levels,
    /// and `p` as the probability that a given node is present in the next
    /// level. The generator is seeded from OS entropy.
    ///
    /// # Panics
    ///
    /// `p` must be between 0 and 1 and will panic otherwise.  Similarly,
    /// `total` must be at greater or equal to 1.
    pub fn new(total: usize, p: f64) -> Self {
        match Self::try_new(total, p) {
            | Ok(generator) => generator,
            | Err(e) => panic!("{}", e),
        }
    }

    /// The non-panicking form of [`GeometricalLevelGenerator::new`].
    pub fn try_new(total: usize, p: f64) -> Result<Self, SkipListError> {
        Self::validate(total, p)?;
        Ok(GeometricalLevelGenerator {
            total,
            p,
            rng: SmallRng::from_entropy(),
        })
    }

    /// Create a generator whose sequence of levels is fully determined by
    /// `seed`.
    pub fn with_seed(total: usize, p: f64, seed: u64) -> Result<Self, SkipListError> {
        Self::validate(total, p)?;
        Ok(GeometricalLevelGenerator {
            total,
            p,
            rng: SmallRng::seed_from_u64(seed),
        })
    }

    /// The promotion probability.
    pub fn probability(&self) -> f64 {
        self.p
    }

    fn validate(total: usize, p: f64) -> Result<(), SkipListError> {
        if total == 0 {
            return Err(SkipListError::InvalidMaxLevel(total));
        }
        // written this way so NaN is rejected too
        if !(p > 0.0 && p < 1.0) {
            return Err(SkipListError::InvalidProbability(p));
        }
        Ok(())
    }
}

impl LevelGenerator for GeometricalLevelGenerator {
    fn random(&mut self) -> usize {
        let mut level = 1;
        while level < self.total && self.rng.gen::<f64>() < self.p {
            level += 1;
        }
        level
    }

    fn total(&self) -> usize {
        self.total
    }
}
