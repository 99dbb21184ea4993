//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// City name was empty or whitespace-only
    #[error("City name cannot be empty")]
    EmptyCityName,

    /// Latitude outside [-90, 90]
    #[error("Latitude must be between -90 and 90 degrees")]
    InvalidLatitude(f64),

    /// Longitude outside [-180, 180]
    #[error("Longitude must be between -180 and 180 degrees")]
    InvalidLongitude(f64),
}
