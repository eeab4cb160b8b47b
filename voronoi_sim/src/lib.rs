//! Voronoi Elimination Experiment Harness
//!
//! This crate drives the engine from `voronoi_core` through many independent,
//! seeded trials and aggregates their survivors by rank.
//!
//! # Core Principle: One Seed, Many Trials
//!
//! All entropy is derived from a single 64-bit master seed:
//! - **Trials**: each trial gets its own `SeededSource`, derived from
//!   the master seed and the trial index
//! - **Isolation**: adding trials never changes the streams of earlier ones
//! - **Independence**: trials share no world, stream or record
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                    ExperimentRunner                      │
//! │  ┌──────────────┐     ┌──────────────┐                   │
//! │  │  SimContext  │────►│  Trial #0..N │  (seeded source)  │
//! │  └──────────────┘     └──────┬───────┘                   │
//! │                              │ survivors                 │
//! │                       ┌──────▼───────┐                   │
//! │                       │ rank stats   │──► ExperimentExport│
//! │                       └──────────────┘                   │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use voronoi_sim::{ExperimentConfig, ExperimentRunner};
//! use voronoi_sim::scenarios::ExperimentId;
//!
//! let runner = ExperimentRunner::new(ExperimentConfig::default());
//! let result = runner.run(ExperimentId::GlobalElimination);
//! ```

mod config;
mod context;
mod error;
mod exporter;
mod runner;
mod trial;
pub mod scenarios;

pub use config::ExperimentConfig;
pub use context::SimContext;
pub use error::SimError;
pub use exporter::ExperimentExport;
pub use runner::{ExperimentResult, ExperimentRunner};
pub use trial::{run_trial, TrialOutcome};
