//! Error types for payload emission.

use thiserror::Error;

/// Errors that can occur while emitting a status payload.
#[derive(Debug, Error)]
pub enum EmitError {
    /// Writing to the output stream failed (closed pipe, bad descriptor, full device)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed
    #[error("Serialize error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Payload does not satisfy its invariants
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),
}
