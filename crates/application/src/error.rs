//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level validation error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// A weather query failed for a caller-correctable reason
    ///
    /// The only kind the HTTP boundary maps from the service layer; carries a
    /// human-readable message naming the original city or coordinates.
    #[error("{0}")]
    QueryFailed(String),

    /// Network-level failure or non-success provider status
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Provider payload was malformed or empty
    #[error("Invalid provider response: {0}")]
    InvalidResponse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}
