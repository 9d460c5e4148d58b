use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::render::RenderError;

/// Failure of a single composition.
///
/// `InvalidArgument` and `PayloadTooLarge` are raised before any wrapping or layout work
/// starts. `ResourceFailure` covers image decoding and the rendering backend. None of them
/// carries partial output.
#[derive(Debug, Error)]
pub enum ComposeError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Resource failure: {0}")]
    ResourceFailure(String),
}

impl From<RenderError> for ComposeError {
    fn from(e: RenderError) -> Self {
        match e {
            RenderError::Unencodable(_) => ComposeError::InvalidArgument(e.to_string()),
            other => ComposeError::ResourceFailure(other.to_string()),
        }
    }
}

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Resource failure: {0}")]
    ResourceFailure(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<ComposeError> for AppError {
    fn from(e: ComposeError) -> Self {
        match e {
            ComposeError::InvalidArgument(msg) => AppError::Validation(msg),
            ComposeError::PayloadTooLarge(msg) => AppError::PayloadTooLarge(msg),
            ComposeError::ResourceFailure(msg) => AppError::ResourceFailure(msg),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => {
                tracing::warn!("Rejected request: {msg}");
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            AppError::PayloadTooLarge(msg) => {
                tracing::warn!("Rejected oversized request: {msg}");
                (StatusCode::PAYLOAD_TOO_LARGE, "PAYLOAD_TOO_LARGE", msg.clone())
            }
            AppError::ResourceFailure(msg) => {
                tracing::error!("Resource failure: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "RESOURCE_FAILURE",
                    msg.clone(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
