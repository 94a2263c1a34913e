//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// admission). Console and IO concerns belong to the binary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. empty name, kindness out of range).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// The requested species is not one the zoo knows how to house.
    #[error("unknown species: {0}")]
    UnknownSpecies(String),

    /// The veterinary clinic refused the animal at admission.
    #[error("{name} failed the health check")]
    HealthCheckFailed { name: String },
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn unknown_species(name: impl Into<String>) -> Self {
        Self::UnknownSpecies(name.into())
    }

    pub fn health_check_failed(name: impl Into<String>) -> Self {
        Self::HealthCheckFailed { name: name.into() }
    }
}
