//! Statistics over run results
//! ============================
//!
//! A run result is the sorted survivor sequence of one independent trial.
//! Aligning many run results by rank gives, for every rank position, the
//! distribution of the r-th smallest survivor:
//! - **Mean** per rank
//! - **Sample standard deviation** per rank (Bessel's correction)
//! - **Population standard deviation** per rank
//!
//! Variance is accumulated with Welford's online algorithm.

use crate::error::{Result, WorldError};
use crate::interval_world::RemovalRecord;
use serde::{Deserialize, Serialize};

/// Per-rank statistics across equal-length runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankStatistics {
    /// Number of runs aggregated
    pub runs: usize,
    /// Mean of the r-th value, indexed by rank
    pub means: Vec<f64>,
    /// Sample standard deviation (n - 1); 0.0 for a single run
    pub std_devs: Vec<f64>,
    /// Population standard deviation (n)
    pub population_std_devs: Vec<f64>,
}

/// Computes per-rank mean and standard deviation across `runs`.
///
/// # Errors
/// `InvalidArgument` if `runs` is empty or any run differs in length from the first.
pub fn rank_statistics<S: AsRef<[f64]>>(runs: &[S]) -> Result<RankStatistics> {
    let first = runs
        .first()
        .ok_or_else(|| WorldError::invalid_argument("no runs to aggregate"))?;
    let length = first.as_ref().len();

    for (i, run) in runs.iter().enumerate() {
        let run = run.as_ref();
        if run.len() != length {
            return Err(WorldError::invalid_argument(format!(
                "run {} has length {}, expected {}",
                i,
                run.len(),
                length
            )));
        }
    }

    let mut accumulators = vec![Welford::default(); length];
    for run in runs {
        for (acc, &value) in accumulators.iter_mut().zip(run.as_ref()) {
            acc.update(value);
        }
    }

    Ok(RankStatistics {
        runs: runs.len(),
        means: accumulators.iter().map(|a| a.mean).collect(),
        std_devs: accumulators.iter().map(Welford::sample_std_dev).collect(),
        population_std_devs: accumulators.iter().map(Welford::population_std_dev).collect(),
    })
}

/// Counts every value of every run into `bins` equal bins over [0, 1].
///
/// 1.0 is counted in the last bin.
///
/// # Errors
/// `InvalidArgument` if `bins` is 0.
pub fn histogram<S: AsRef<[f64]>>(runs: &[S], bins: usize) -> Result<Vec<u64>> {
    if bins == 0 {
        return Err(WorldError::invalid_argument("histogram needs at least one bin"));
    }

    let mut counts = vec![0u64; bins];
    for value in runs.iter().flat_map(|run| run.as_ref().iter()) {
        let bin = ((value * bins as f64) as usize).min(bins - 1);
        counts[bin] += 1;
    }
    Ok(counts)
}

/// Mean weight held by eliminated points, or `None` if nothing was removed.
pub fn mean_removed_weight(records: &[RemovalRecord]) -> Option<f64> {
    if records.is_empty() {
        return None;
    }
    Some(records.iter().map(|r| r.weight).sum::<f64>() / records.len() as f64)
}

// =============================================================================
// WELFORD ACCUMULATOR
// =============================================================================

#[derive(Debug, Clone, Copy, Default)]
struct Welford {
    count: u64,
    mean: f64,
    m2: f64,
}

impl Welford {
    fn update(&mut self, x: f64) {
        self.count += 1;
        let delta = x - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (x - self.mean);
    }

    fn sample_std_dev(&self) -> f64 {
        if self.count < 2 {
            return 0.0;
        }
        (self.m2 / (self.count - 1) as f64).sqrt()
    }

    fn population_std_dev(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        (self.m2 / self.count as f64).sqrt()
    }
}
