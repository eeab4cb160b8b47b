//! Voronoi Environment Abstraction Layer
//!
//! This crate provides the randomness capability that the elimination engine
//! consumes. Nothing in `voronoi_core` reaches for a global generator: every
//! construction, sampling and growth call receives a [`RandomSource`].
//!
//! # Core Concept: Explicit Entropy
//!
//! The engine needs exactly three draws:
//! - a uniform value on `[0, 1)`
//! - a standard-normal value
//! - `k` distinct indices out of `0..n` (sampling without replacement)
//!
//! Production code uses [`EntropySource`] (OS-seeded). Tests and the
//! simulation harness use [`SeededSource`], which derives every draw from a
//! single 64-bit seed, so any run is reproducible from its seed number.
//!
//! # Example
//!
//! ```ignore
//! use voronoi_env::{RandomSource, SeededSource};
//!
//! let mut rng = SeededSource::new(42);
//! let x = rng.uniform();
//! let picks = rng.sample_indices(100, 5);
//! ```

mod source;
mod entropy;
mod seeded;

pub use source::RandomSource;
pub use entropy::EntropySource;
pub use seeded::SeededSource;
