//! Backward evolution - growing a configuration by inserting the next loser.
//!
//! A candidate point is drawn uniformly on [0, 1] and inserted; the insertion
//! is accepted only if, in the rebuilt world, the new point holds the global
//! minimum weight (first occurrence). In other words, the accepted point is
//! exactly the one a global elimination round would remove next.
//!
//! The acceptance test is kept literal. Whether the grown configurations are a
//! faithful sample of time-reversed elimination is not established.

use crate::error::{Result, WorldError};
use crate::interval_world::IntervalWorld;
use tracing::debug;
use voronoi_env::RandomSource;

/// An accepted insertion.
#[derive(Debug, Clone)]
pub struct Growth {
    /// The world including the accepted point
    pub world: IntervalWorld,

    /// Candidates drawn, the accepted one included
    pub attempts: u64,
}

/// Rejection sampler for backward growth.
///
/// The iteration budget is explicit: `unbounded()` may loop for an
/// arbitrarily long time on unlucky configurations, `with_max_attempts(n)`
/// gives up with `AttemptsExhausted` after `n` rejected candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackwardSampler {
    max_attempts: Option<u64>,
}

impl BackwardSampler {
    /// Sampler with no iteration cap.
    pub fn unbounded() -> Self {
        Self { max_attempts: None }
    }

    /// Sampler that gives up after `max_attempts` candidates per insertion.
    pub fn with_max_attempts(max_attempts: u64) -> Self {
        Self {
            max_attempts: Some(max_attempts),
        }
    }

    /// The per-insertion budget, if any.
    pub fn max_attempts(&self) -> Option<u64> {
        self.max_attempts
    }

    /// Inserts exactly one accepted point.
    ///
    /// The input world is left untouched; the returned world has one more point.
    ///
    /// # Errors
    /// `AttemptsExhausted` if the budget runs out first.
    pub fn grow_one<R: RandomSource + ?Sized>(
        &self,
        world: &IntervalWorld,
        rng: &mut R,
    ) -> Result<Growth> {
        let mut attempts: u64 = 0;
        loop {
            if let Some(limit) = self.max_attempts {
                if attempts >= limit {
                    return Err(WorldError::AttemptsExhausted { attempts });
                }
            }
            attempts += 1;

            let candidate = rng.uniform();
            let (grown, position) = world.with_inserted(candidate)?;
            if grown.global_minimum() == position {
                debug!(
                    "Accepted x={:.6} at rank {} after {} attempts",
                    candidate, position, attempts
                );
                return Ok(Growth {
                    world: grown,
                    attempts,
                });
            }
        }
    }

    /// Grows `world` one accepted point at a time until it holds `target` points.
    ///
    /// # Errors
    /// - `InvalidArgument` if `target` is not larger than the current size
    /// - `AttemptsExhausted` if any single insertion runs out of budget
    pub fn grow_to<R: RandomSource + ?Sized>(
        &self,
        world: &IntervalWorld,
        target: usize,
        rng: &mut R,
    ) -> Result<Growth> {
        if target <= world.len() {
            return Err(WorldError::invalid_argument(format!(
                "target {} must exceed current size {}",
                target,
                world.len()
            )));
        }

        let mut current = world.clone();
        let mut attempts = 0;
        while current.len() < target {
            let step = self.grow_one(&current, rng)?;
            attempts += step.attempts;
            current = step.world;
        }

        Ok(Growth {
            world: current,
            attempts,
        })
    }
}

impl Default for BackwardSampler {
    fn default() -> Self {
        Self::unbounded()
    }
}
