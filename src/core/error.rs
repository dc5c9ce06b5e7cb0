//! Error types for the accounts registry.

use crate::core::types::UnitKind;
use thiserror::Error;

/// Result type alias for registry operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in registry operations.
#[derive(Error, Debug)]
pub enum Error {
    // Registration errors
    #[error("not a valid {0}: {1}")]
    InvalidKind(UnitKind, String),

    #[error("{0} {1} is already registered")]
    DuplicateRegistration(UnitKind, String),

    #[error("{0} {1} is not registered")]
    NotRegistered(UnitKind, String),

    // Log level errors
    #[error("unknown log level: {0}")]
    UnknownLogLevel(String),

    // Serialization errors
    #[error("serialization error: {0}")]
    SerializationError(String),

    // Generic errors
    #[error("internal error: {0}")]
    Internal(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::SerializationError(err.to_string())
    }
}
