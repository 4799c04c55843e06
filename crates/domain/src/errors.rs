//! Domain-level errors

use thiserror::Error;

use crate::value_objects::InvalidCoordinates;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Coordinates outside the valid latitude/longitude range
    #[error(transparent)]
    InvalidCoordinates(#[from] InvalidCoordinates),

    /// Station identifier is malformed
    #[error("Invalid station id: {0}")]
    InvalidStationId(String),

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}
