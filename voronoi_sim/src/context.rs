//! Simulation context: per-trial seed derivation.

use voronoi_env::SeededSource;

/// Derives independent, reproducible random streams for each trial.
///
/// Trial streams are derived from:
/// `master_seed * golden_ratio + trial * prime`
///
/// so trial `i` sees the same stream no matter how many trials run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimContext {
    /// Master seed for this experiment
    seed: u64,
}

impl SimContext {
    /// Creates a new SimContext with the given master seed.
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Returns the master seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Seed of the stream handed to trial `trial`.
    pub fn trial_seed(&self, trial: u64) -> u64 {
        self.seed
            .wrapping_mul(0x9e3779b97f4a7c15) // Golden ratio prime
            .wrapping_add(trial.wrapping_mul(0x517cc1b727220a95))
    }

    /// Fresh random stream for trial `trial`.
    pub fn trial_source(&self, trial: u64) -> SeededSource {
        SeededSource::new(self.trial_seed(trial))
    }
}
