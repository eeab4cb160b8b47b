//! Voronoi Core - Sequential elimination over 1-D Voronoi intervals
//!
//! Points live on the bounded line `[0, 1]`. Each point's weight is the length
//! of its Voronoi interval, and the weights always partition `[0, 1]`.
//! This library provides:
//! 1. **IntervalWorld**: sorted points + weights, with O(1) incremental removal
//! 2. **Elimination**: repeated removal of the lowest-weight point (global or sampled)
//! 3. **Backward growth**: rejection-sampled insertion of the next loser
//! 4. **Statistics**: per-rank mean and standard deviation across runs

pub mod error;
pub mod interval_world;
pub mod elimination;
pub mod backward;
pub mod statistics;

// Re-export key types for convenience
pub use error::{Result, WorldError};
pub use interval_world::{IntervalWorld, PointDistribution, RemovalRecord};
pub use elimination::{run_global, run_sampled, run_to_target, SelectionPolicy};
pub use backward::{BackwardSampler, Growth};
pub use statistics::{histogram, mean_removed_weight, rank_statistics, RankStatistics};
