//! Error types for the HSN validation API.
//!
//! Malformed or unknown codes are never errors here; those are encoded in
//! the `ValidationResult` itself. This covers bad request shapes and
//! unexpected internal failures only.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("missing 'codes' field in payload")]
    MissingCodes,

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::MissingCodes => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": "Please provide 'codes' array in JSON payload",
                })),
            )
                .into_response(),
            ApiError::Internal(e) => {
                tracing::error!("Internal error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "error": "Internal error",
                    })),
                )
                    .into_response()
            }
        }
    }
}
