//! Error types for the experiment harness.

use thiserror::Error;
use voronoi_core::WorldError;

/// Errors that can occur while configuring, running or exporting an experiment.
#[derive(Debug, Error)]
pub enum SimError {
    /// Experiment parameters are inconsistent
    #[error("Configuration error: {0}")]
    Config(String),

    /// The engine rejected an operation
    #[error("Engine error: {0}")]
    Engine(#[from] WorldError),

    /// Export serialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Export file could not be written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SimError {
    /// Creates a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
