//! JSON exporter for the plotting layer.
//!
//! Exports rank statistics and survivor histograms as JSON for external
//! plotting scripts.

use crate::config::ExperimentConfig;
use crate::error::SimError;
use crate::runner::ExperimentResult;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;

/// Complete experiment export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperimentExport {
    /// Experiment name
    pub experiment: String,

    /// Master seed used
    pub seed: u64,

    /// Parameters the experiment ran with
    pub config: ExperimentConfig,

    pub trials_completed: usize,
    pub trials_failed: usize,

    /// Mean survivor value per rank
    pub means: Vec<f64>,

    /// Sample standard deviation per rank
    pub std_devs: Vec<f64>,

    /// Population standard deviation per rank
    pub population_std_devs: Vec<f64>,

    /// Survivor counts over equal bins of [0, 1]
    pub histogram: Vec<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mean_removed_weight: Option<f64>,

    /// Raw run results, only when requested
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub runs: Vec<Vec<f64>>,

    /// Final results
    pub passed: bool,
}

impl ExperimentExport {
    /// Builds an export from a finished experiment.
    pub fn from_result(config: &ExperimentConfig, result: &ExperimentResult, include_runs: bool) -> Self {
        let (means, std_devs, population_std_devs) = match &result.statistics {
            Some(stats) => (
                stats.means.clone(),
                stats.std_devs.clone(),
                stats.population_std_devs.clone(),
            ),
            None => (Vec::new(), Vec::new(), Vec::new()),
        };

        Self {
            experiment: result.experiment.name().to_string(),
            seed: result.seed,
            config: config.clone(),
            trials_completed: result.trials_completed,
            trials_failed: result.trials_failed,
            means,
            std_devs,
            population_std_devs,
            histogram: result.histogram.clone(),
            mean_removed_weight: result.mean_removed_weight,
            runs: if include_runs { result.runs.clone() } else { Vec::new() },
            passed: result.passed,
        }
    }

    /// Serializes to pretty JSON.
    pub fn to_json(&self) -> Result<String, SimError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Writes to a JSON file.
    pub fn write_to_file(&self, path: &str) -> Result<(), SimError> {
        let json = self.to_json()?;
        let mut file = File::create(path)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }
}
