//! Experiment configuration.

use crate::error::SimError;
use serde::{Deserialize, Serialize};
use voronoi_core::{BackwardSampler, PointDistribution};

/// Configuration for an experiment (a batch of independent trials).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentConfig {
    /// Master seed for determinism
    pub seed: u64,

    /// Initial population (elimination) or final population (growth)
    pub points: usize,

    /// Population left after elimination, or the starting size for growth
    pub survivors: usize,

    /// Number of independent trials
    pub trials: usize,

    /// Points compared per round under the sampled policy
    pub sample_size: usize,

    /// Distribution of the initial points
    pub distribution: PointDistribution,

    /// Rejection budget per backward insertion (None = unbounded)
    pub max_attempts: Option<u64>,

    /// Bins of the survivor histogram
    pub histogram_bins: usize,

    /// Log progress every N trials (0 = never)
    pub progress_every: usize,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            points: 100,
            survivors: 10,
            trials: 200,
            sample_size: 5,
            distribution: PointDistribution::Uniform,
            max_attempts: Some(1_000_000),
            histogram_bins: 20,
            progress_every: 50,
        }
    }
}

impl ExperimentConfig {
    /// Checks that the parameters describe a runnable experiment.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.survivors == 0 {
            return Err(SimError::config("survivors must be at least 1"));
        }
        if self.points <= self.survivors {
            return Err(SimError::config(format!(
                "points ({}) must exceed survivors ({})",
                self.points, self.survivors
            )));
        }
        if self.trials == 0 {
            return Err(SimError::config("trials must be at least 1"));
        }
        if self.sample_size == 0 {
            return Err(SimError::config("sample size must be at least 1"));
        }
        if self.histogram_bins == 0 {
            return Err(SimError::config("histogram needs at least one bin"));
        }
        Ok(())
    }

    /// The backward sampler this configuration describes.
    pub fn sampler(&self) -> BackwardSampler {
        match self.max_attempts {
            Some(limit) => BackwardSampler::with_max_attempts(limit),
            None => BackwardSampler::unbounded(),
        }
    }

    /// Elimination rounds per trial.
    pub fn rounds(&self) -> usize {
        self.points.saturating_sub(self.survivors)
    }
}
