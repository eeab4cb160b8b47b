//! Error types for the Voronoi elimination engine.

use thiserror::Error;

/// Errors raised when a caller violates an engine contract.
///
/// None of these are transient: retrying the same call fails the same way.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WorldError {
    /// Malformed or out-of-range construction/size parameters
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The operation would drive a world below one point
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// The caller-supplied rejection budget ran out before a point was accepted
    #[error("Rejection budget exhausted after {attempts} attempts")]
    AttemptsExhausted { attempts: u64 },
}

impl WorldError {
    /// Creates an invalid-argument error.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Creates an invalid-state error.
    pub fn invalid_state(msg: impl Into<String>) -> Self {
        Self::InvalidState(msg.into())
    }
}

/// Result alias used across the engine.
pub type Result<T> = std::result::Result<T, WorldError>;
