//! Application error handling
//!
//! This module provides unified error handling for the API, converting
//! domain outcomes to HTTP responses. The error taxonomy is small and
//! fixed: validation failures (400), unknown users (404), and store
//! failures (500, surfaced with the underlying message).

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use exercise_tracker_shared::types::ErrorBody;
use thiserror::Error;
use tracing::error;

/// API error type that can be converted to HTTP responses
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Store error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Internal(err) => {
                error!("Store error: {:?}", err);
                // Store failures surface their message rather than a
                // generic placeholder; they are never retried here.
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        };

        // Every failure uses the same flat envelope: {"error": "<message>"}
        (status, Json(ErrorBody { error: message })).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
