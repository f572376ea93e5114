//! Error types for the wire and binding layers
//!
//! The transform engine itself never fails: out-of-range positions clamp.
//! Errors only arise when operations cross a serialization boundary.

use thiserror::Error;

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, OtError>;

/// Errors raised while encoding or decoding operations
#[derive(Debug, Error)]
pub enum OtError {
    /// Payload does not describe a valid operation or operation list
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// Serialization failure
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
