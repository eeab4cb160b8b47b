//! Production implementation of RandomSource using OS entropy.

use crate::RandomSource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

/// Production source backed by an OS-seeded `StdRng`.
///
/// This is the "real" implementation for exploratory runs where
/// reproducibility is not wanted. Two instances never share a stream.
pub struct EntropySource {
    rng: StdRng,
}

impl EntropySource {
    /// Creates a new EntropySource seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl Default for EntropySource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for EntropySource {
    fn uniform(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    fn standard_normal(&mut self) -> f64 {
        self.rng.sample(StandardNormal)
    }

    fn sample_indices(&mut self, length: usize, amount: usize) -> Vec<usize> {
        rand::seq::index::sample(&mut self.rng, length, amount.min(length)).into_vec()
    }

    fn seed(&self) -> u64 {
        // Not seeded
        0
    }
}
