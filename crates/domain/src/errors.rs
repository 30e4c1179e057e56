//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Query text or limit rejected
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// Latitude or longitude out of range
    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    /// Administrative level outside the supported range
    #[error("Invalid admin level: {0}")]
    InvalidAdminLevel(u8),
}
