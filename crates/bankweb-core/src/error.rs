//! Error types for bankweb-core

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error codes for programmatic error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Amount could not be parsed as a number
    InvalidAmount,
    /// Input failed a pre-submit check
    ValidationError,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCode::InvalidAmount => write!(f, "INVALID_AMOUNT"),
            ErrorCode::ValidationError => write!(f, "VALIDATION_ERROR"),
        }
    }
}

/// Main error type for bankweb-core
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Amount is not a number: {input}")]
    InvalidAmount { input: String },

    #[error("{message}")]
    ValidationError { message: String },
}

impl CoreError {
    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            CoreError::InvalidAmount { .. } => ErrorCode::InvalidAmount,
            CoreError::ValidationError { .. } => ErrorCode::ValidationError,
        }
    }
}

/// Result type with CoreError
pub type CoreResult<T> = Result<T, CoreError>;
