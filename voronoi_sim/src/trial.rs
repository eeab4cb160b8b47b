//! A single independent trial.

use crate::config::ExperimentConfig;
use crate::scenarios::ExperimentId;
use voronoi_core::{run_global, run_sampled, IntervalWorld, RemovalRecord, Result};
use voronoi_env::RandomSource;

/// What one trial produced.
#[derive(Debug, Clone, PartialEq)]
pub struct TrialOutcome {
    /// Final sorted point sequence (the run result)
    pub survivors: Vec<f64>,

    /// Removal records in removal order; empty for growth trials
    pub removals: Vec<RemovalRecord>,

    /// Rejection-sampling attempts spent; 0 for elimination trials
    pub attempts: u64,
}

/// Runs one trial of `experiment` with its own random stream.
///
/// - Elimination: `points` drawn from the distribution, eliminated down to `survivors`
/// - Growth: `survivors` drawn from the distribution, grown up to `points`
pub fn run_trial<R: RandomSource + ?Sized>(
    config: &ExperimentConfig,
    experiment: ExperimentId,
    rng: &mut R,
) -> Result<TrialOutcome> {
    match experiment {
        ExperimentId::GlobalElimination => {
            let mut world = IntervalWorld::generate(config.points, config.distribution, rng)?;
            let removals = run_global(&mut world, config.rounds())?;
            Ok(TrialOutcome {
                survivors: world.into_points(),
                removals,
                attempts: 0,
            })
        }
        ExperimentId::SampledElimination => {
            let mut world = IntervalWorld::generate(config.points, config.distribution, rng)?;
            let removals = run_sampled(&mut world, config.rounds(), config.sample_size, rng)?;
            Ok(TrialOutcome {
                survivors: world.into_points(),
                removals,
                attempts: 0,
            })
        }
        ExperimentId::BackwardGrowth => {
            let seed_world = IntervalWorld::generate(config.survivors, config.distribution, rng)?;
            let growth = config.sampler().grow_to(&seed_world, config.points, rng)?;
            Ok(TrialOutcome {
                survivors: growth.world.into_points(),
                removals: Vec::new(),
                attempts: growth.attempts,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use voronoi_core::WorldError;
    use voronoi_env::SeededSource;

    fn small_config() -> ExperimentConfig {
        ExperimentConfig {
            points: 30,
            survivors: 6,
            sample_size: 3,
            ..Default::default()
        }
    }

    #[test]
    fn test_global_trial() {
        let config = small_config();
        let outcome = run_trial(&config, ExperimentId::GlobalElimination, &mut SeededSource::new(1)).unwrap();

        assert_eq!(outcome.survivors.len(), 6);
        assert_eq!(outcome.removals.len(), 24);
        assert!(outcome.survivors.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_sampled_trial() {
        let config = small_config();
        let outcome = run_trial(&config, ExperimentId::SampledElimination, &mut SeededSource::new(1)).unwrap();

        assert_eq!(outcome.survivors.len(), 6);
        assert_eq!(outcome.removals.len(), 24);
        assert_eq!(outcome.attempts, 0);
    }

    #[test]
    fn test_backward_trial() {
        let config = ExperimentConfig {
            points: 12,
            survivors: 4,
            ..Default::default()
        };
        let outcome = run_trial(&config, ExperimentId::BackwardGrowth, &mut SeededSource::new(2)).unwrap();

        assert_eq!(outcome.survivors.len(), 12);
        assert!(outcome.removals.is_empty());
        assert!(outcome.attempts >= 8);
    }

    #[test]
    fn test_backward_trial_budget_exhausted() {
        let config = ExperimentConfig {
            points: 12,
            survivors: 4,
            max_attempts: Some(0),
            ..Default::default()
        };
        let err = run_trial(&config, ExperimentId::BackwardGrowth, &mut SeededSource::new(2)).unwrap_err();
        assert!(matches!(err, WorldError::AttemptsExhausted { .. }));
    }

    #[test]
    fn test_trial_deterministic() {
        let config = small_config();
        let a = run_trial(&config, ExperimentId::SampledElimination, &mut SeededSource::new(9)).unwrap();
        let b = run_trial(&config, ExperimentId::SampledElimination, &mut SeededSource::new(9)).unwrap();
        assert_eq!(a, b);
    }

    proptest! {
        #[test]
        fn prop_elimination_trials_keep_survivor_count(
            points in 2usize..60,
            keep in 1usize..30,
            sample_size in 1usize..10,
            seed in any::<u64>(),
        ) {
            prop_assume!(keep < points);
            let config = ExperimentConfig { points, survivors: keep, sample_size, ..Default::default() };

            for experiment in [ExperimentId::GlobalElimination, ExperimentId::SampledElimination] {
                let outcome = run_trial(&config, experiment, &mut SeededSource::new(seed)).unwrap();
                prop_assert_eq!(outcome.survivors.len(), keep);
                prop_assert_eq!(outcome.removals.len(), points - keep);
                prop_assert!(outcome.survivors.iter().all(|p| (0.0..=1.0).contains(p)));
            }
        }
    }
}
