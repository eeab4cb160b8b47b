//! Experiment runner - executes batches of independent trials.

use crate::config::ExperimentConfig;
use crate::context::SimContext;
use crate::error::SimError;
use crate::scenarios::ExperimentId;
use crate::trial::run_trial;

use tracing::{debug, info, warn};
use voronoi_core::{histogram, mean_removed_weight, rank_statistics, RankStatistics, RemovalRecord};

/// Results from running an experiment.
#[derive(Debug, Clone)]
pub struct ExperimentResult {
    /// Experiment that was run
    pub experiment: ExperimentId,

    /// Master seed used
    pub seed: u64,

    /// Whether at least one trial completed and aggregation succeeded
    pub passed: bool,

    /// Trials that produced a run result
    pub trials_completed: usize,

    /// Trials that returned an error
    pub trials_failed: usize,

    /// Per-rank statistics over completed trials
    pub statistics: Option<RankStatistics>,

    /// Survivor counts over equal bins of [0, 1]
    pub histogram: Vec<u64>,

    /// Mean weight of eliminated points across all trials
    pub mean_removed_weight: Option<f64>,

    /// Rejection-sampling attempts across all trials
    pub total_attempts: u64,

    /// Run results of completed trials, in trial order
    pub runs: Vec<Vec<f64>>,

    /// Failure message if any
    pub failure_reason: Option<String>,
}

/// Runs experiments over many seeded trials.
pub struct ExperimentRunner {
    config: ExperimentConfig,
    context: SimContext,
}

impl ExperimentRunner {
    /// Creates a new experiment runner.
    pub fn new(config: ExperimentConfig) -> Self {
        let context = SimContext::new(config.seed);
        Self { config, context }
    }

    /// Sets the master seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self.context = SimContext::new(seed);
        self
    }

    /// Sets the number of trials.
    pub fn with_trials(mut self, trials: usize) -> Self {
        self.config.trials = trials;
        self
    }

    /// Sets the sample size of the sampled policy.
    pub fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.config.sample_size = sample_size;
        self
    }

    /// Returns the configuration.
    pub fn config(&self) -> &ExperimentConfig {
        &self.config
    }

    /// Runs an experiment and returns the result.
    ///
    /// Trials run one after another, each on its own derived stream.
    ///
    /// # Errors
    /// `SimError::Config` if the configuration is not runnable. Individual
    /// trial failures are counted in the result instead.
    pub fn run(&self, experiment: ExperimentId) -> Result<ExperimentResult, SimError> {
        self.config.validate()?;

        info!(
            "Starting experiment: {} (seed={}, trials={}, {} -> {} points)",
            experiment.name(),
            self.context.seed(),
            self.config.trials,
            self.config.points,
            self.config.survivors
        );

        let mut runs: Vec<Vec<f64>> = Vec::with_capacity(self.config.trials);
        let mut removals: Vec<RemovalRecord> = Vec::new();
        let mut total_attempts = 0;
        let mut trials_failed = 0;
        let mut last_error: Option<String> = None;

        for trial in 0..self.config.trials {
            let mut rng = self.context.trial_source(trial as u64);

            match run_trial(&self.config, experiment, &mut rng) {
                Ok(outcome) => {
                    total_attempts += outcome.attempts;
                    removals.extend(outcome.removals);
                    runs.push(outcome.survivors);
                }
                Err(e) => {
                    warn!("Trial {} of {} failed: {}", trial, experiment.name(), e);
                    trials_failed += 1;
                    last_error = Some(e.to_string());
                }
            }

            let done = trial + 1;
            if self.config.progress_every > 0 && done % self.config.progress_every == 0 {
                info!("  {}: {}/{} trials", experiment.name(), done, self.config.trials);
            }
        }

        let statistics = match rank_statistics(&runs) {
            Ok(stats) => Some(stats),
            Err(e) => {
                debug!("No statistics for {}: {}", experiment.name(), e);
                None
            }
        };
        let histogram = histogram(&runs, self.config.histogram_bins)?;
        let passed = statistics.is_some();

        let failure_reason = if passed {
            None
        } else {
            Some(format!(
                "all {} trials failed{}",
                self.config.trials,
                last_error.map(|e| format!(" (last: {})", e)).unwrap_or_default()
            ))
        };

        Ok(ExperimentResult {
            experiment,
            seed: self.context.seed(),
            passed,
            trials_completed: runs.len(),
            trials_failed,
            statistics,
            histogram,
            mean_removed_weight: mean_removed_weight(&removals),
            total_attempts,
            runs,
            failure_reason,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> ExperimentConfig {
        ExperimentConfig {
            points: 40,
            survivors: 5,
            trials: 20,
            sample_size: 4,
            progress_every: 0,
            ..Default::default()
        }
    }

    #[test]
    fn test_global_experiment() {
        let runner = ExperimentRunner::new(small_config());

        let result = runner.run(ExperimentId::GlobalElimination).unwrap();

        assert!(result.passed);
        assert_eq!(result.trials_completed, 20);
        assert_eq!(result.trials_failed, 0);
        let stats = result.statistics.unwrap();
        assert_eq!(stats.means.len(), 5);
        assert!(stats.means.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(result.histogram.iter().sum::<u64>(), 100);
        assert!(result.mean_removed_weight.unwrap() > 0.0);
    }

    #[test]
    fn test_sampled_experiment_deterministic() {
        let runner1 = ExperimentRunner::new(small_config());
        let runner2 = ExperimentRunner::new(small_config());

        let result1 = runner1.run(ExperimentId::SampledElimination).unwrap();
        let result2 = runner2.run(ExperimentId::SampledElimination).unwrap();

        assert_eq!(result1.runs, result2.runs);
        assert_eq!(result1.statistics, result2.statistics);
    }

    #[test]
    fn test_adding_trials_keeps_earlier_runs() {
        let short = ExperimentRunner::new(small_config()).with_trials(5);
        let long = ExperimentRunner::new(small_config()).with_trials(10);

        let a = short.run(ExperimentId::SampledElimination).unwrap();
        let b = long.run(ExperimentId::SampledElimination).unwrap();

        assert_eq!(a.runs[..], b.runs[..5]);
    }

    #[test]
    fn test_full_sample_equals_global() {
        let global = ExperimentRunner::new(small_config())
            .run(ExperimentId::GlobalElimination)
            .unwrap();
        let sampled = ExperimentRunner::new(small_config())
            .with_sample_size(40)
            .run(ExperimentId::SampledElimination)
            .unwrap();

        assert_eq!(global.runs, sampled.runs);
    }

    #[test]
    fn test_backward_experiment() {
        let config = ExperimentConfig {
            points: 10,
            survivors: 4,
            trials: 5,
            progress_every: 0,
            ..Default::default()
        };

        let result = ExperimentRunner::new(config).run(ExperimentId::BackwardGrowth).unwrap();

        assert!(result.passed);
        assert_eq!(result.statistics.unwrap().means.len(), 10);
        assert!(result.total_attempts >= 30);
        assert_eq!(result.mean_removed_weight, None);
    }

    #[test]
    fn test_exhausted_budget_fails_experiment() {
        let config = ExperimentConfig {
            points: 10,
            survivors: 4,
            trials: 3,
            max_attempts: Some(0),
            progress_every: 0,
            ..Default::default()
        };

        let result = ExperimentRunner::new(config).run(ExperimentId::BackwardGrowth).unwrap();

        assert!(!result.passed);
        assert_eq!(result.trials_failed, 3);
        assert!(result.failure_reason.is_some());
        assert!(result.histogram.iter().all(|c| *c == 0));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = ExperimentConfig {
            points: 5,
            survivors: 5,
            ..Default::default()
        };
        assert!(matches!(
            ExperimentRunner::new(config).run(ExperimentId::GlobalElimination),
            Err(SimError::Config(_))
        ));
    }

    #[test]
    fn test_normal_distribution_experiment() {
        let mut config = small_config();
        config.distribution = voronoi_core::PointDistribution::Normal;

        let result = ExperimentRunner::new(config)
            .with_seed(7)
            .run(ExperimentId::GlobalElimination)
            .unwrap();

        assert_eq!(result.seed, 7);
        let stats = result.statistics.unwrap();
        for mean in &stats.means {
            assert!((0.0..=1.0).contains(mean));
        }
        assert_eq!(stats.runs, 20);
    }
}
