//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Speech recognition error
    #[error("Speech input error: {0}")]
    SpeechInput(String),

    /// Speech synthesis error
    #[error("Speech output error: {0}")]
    SpeechOutput(String),

    /// Device capability missing or failed to answer
    #[error("Capability unavailable: {0}")]
    CapabilityUnavailable(String),

    /// External service error
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}
