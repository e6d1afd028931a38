//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A content table lookup failed.
    #[error("unknown content id: {0}")]
    UnknownContent(String),

    /// A validation error in content or domain logic.
    #[error("validation error: {0}")]
    Validation(String),

    /// The text-generation collaborator failed.
    ///
    /// The engine never surfaces this to the session; it recovers with a
    /// deterministic fallback. The variant exists for the collaborator
    /// seam itself.
    #[error("generation error: {0}")]
    Generation(String),

    /// A persistence error from the unlock store.
    #[error("persistence error: {0}")]
    Persistence(String),
}
