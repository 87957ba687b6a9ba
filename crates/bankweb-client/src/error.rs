//! Error types for bankweb-client
//!
//! Two failure families exist: transport/parse failures (service
//! unreachable, body not decodable) and application failures carried in an
//! {"error": ...} body. All of them render as one human-readable message;
//! no structured error codes travel past this boundary.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error codes for programmatic error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClientErrorCode {
    /// The backend rejected the operation
    Rejected,
    /// The backend could not be reached
    Transport,
    /// The backend answered with an undecodable body
    InvalidResponse,
}

impl std::fmt::Display for ClientErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientErrorCode::Rejected => write!(f, "REJECTED"),
            ClientErrorCode::Transport => write!(f, "TRANSPORT"),
            ClientErrorCode::InvalidResponse => write!(f, "INVALID_RESPONSE"),
        }
    }
}

/// Main error type for bankweb-client
#[derive(Error, Debug)]
pub enum ClientError {
    /// Application-level rejection, message taken from the response body
    #[error("{message}")]
    Api { message: String },

    /// Connection-level failure
    #[error("Banking service unreachable: {message}")]
    Transport { message: String },

    /// 2xx response whose body did not decode
    #[error("Invalid response from banking service: {message}")]
    InvalidResponse { message: String },
}

impl ClientError {
    /// Get the error code
    pub fn code(&self) -> ClientErrorCode {
        match self {
            ClientError::Api { .. } => ClientErrorCode::Rejected,
            ClientError::Transport { .. } => ClientErrorCode::Transport,
            ClientError::InvalidResponse { .. } => ClientErrorCode::InvalidResponse,
        }
    }

    /// True for failures where the backend never processed the request
    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::Transport { .. })
    }
}

/// Result type with ClientError
pub type ClientResult<T> = Result<T, ClientError>;
