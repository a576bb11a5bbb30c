// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Random note generation.
//!
//! Generators never call a global RNG. They draw through an
//! [`IndexSource`], so tests can replay an exact sequence of picks.

pub mod riff;

pub use riff::{shred, RiffGenerator};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform indices
pub trait IndexSource {
    /// Pick an index in `0..len`. Callers guarantee `len > 0`.
    fn next_index(&mut self, len: usize) -> usize;
}

/// [`IndexSource`] backed by a `rand` RNG
#[derive(Debug, Clone)]
pub struct RandomSource<R = StdRng> {
    rng: R,
}

impl RandomSource<StdRng> {
    /// Seeded from the operating system
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Reproducible source for a given seed
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> IndexSource for RandomSource<R> {
    fn next_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Replays a fixed list of indices, cycling when exhausted
#[derive(Debug, Clone)]
pub struct FixedSource {
    indices: Vec<usize>,
    position: usize,
}

impl FixedSource {
    pub fn new(indices: Vec<usize>) -> Self {
        Self { indices, position: 0 }
    }
}

impl IndexSource for FixedSource {
    fn next_index(&mut self, len: usize) -> usize {
        if self.indices.is_empty() {
            return 0;
        }
        let index = self.indices[self.position % self.indices.len()];
        self.position += 1;
        index % len
    }
}
