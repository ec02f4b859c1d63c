//! Error types for the API layer.
//!
//! [`ApiError`] unifies all failure modes into a single enum that converts
//! into an HTTP response via its [`IntoResponse`] implementation. Core
//! errors map onto it: a store/mutation `NotFound` becomes 404, a
//! validation failure 400. Dangling references never reach this type --
//! they render as absent fields, not errors.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use gather_core::MutationError;
use gather_store::StoreError;

/// Errors that can occur in the API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The requested record was not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// A required input field is missing or blank.
    #[error("validation failed: {0}")]
    Validation(String),

    /// An id in the request path is not a valid UUID.
    #[error("invalid id: {0}")]
    InvalidId(String),

    /// A path or query parameter is malformed (bad topic, misplaced filter).
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// A serialization error while assembling the response.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        Self::NotFound(err.to_string())
    }
}

impl From<MutationError> for ApiError {
    fn from(err: MutationError) -> Self {
        match err {
            MutationError::Validation(e) => Self::Validation(e.to_string()),
            MutationError::NotFound(e) => Self::NotFound(e.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            Self::Validation(msg) | Self::InvalidId(msg) | Self::InvalidQuery(msg) => {
                (StatusCode::BAD_REQUEST, msg.clone())
            }
            Self::Serialization(e) => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("JSON error: {e}"))
            }
        };

        let body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}
