//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Speech parameter outside its permitted range
    #[error("Invalid speech parameter: {0}")]
    InvalidSpeechParameter(String),

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}
