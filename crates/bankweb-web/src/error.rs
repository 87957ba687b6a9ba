//! Error types for bankweb-web
//!
//! Every failure leaving this layer carries one human-readable message in
//! an {"error": msg} JSON body, which the page scripts surface via alert.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use bankweb_client::ClientError;
use bankweb_core::CoreError;

#[derive(Error, Debug)]
pub enum ApiError {
    /// Input rejected before any backend request was issued
    #[error("{message}")]
    BadRequest { message: String },

    /// The backend processed and rejected the operation
    #[error("{message}")]
    Upstream { message: String },

    /// The backend could not be reached or answered garbage
    #[error("{message}")]
    Unavailable { message: String },
}

impl ApiError {
    pub fn bad_request(message: impl std::fmt::Display) -> Self {
        ApiError::BadRequest {
            message: message.to_string(),
        }
    }

    /// HTTP status for this error
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::Upstream { .. } => StatusCode::BAD_REQUEST,
            ApiError::Unavailable { .. } => StatusCode::BAD_GATEWAY,
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        ApiError::BadRequest {
            message: error.to_string(),
        }
    }
}

impl From<ClientError> for ApiError {
    fn from(error: ClientError) -> Self {
        match error {
            ClientError::Api { message } => ApiError::Upstream { message },
            other => ApiError::Unavailable {
                message: other.to_string(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
