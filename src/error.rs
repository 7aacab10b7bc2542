use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::client::ClientError;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Authentication required")]
    Unauthorized,

    #[error("Access forbidden")]
    Forbidden,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Upstream error: {0}")]
    Upstream(#[from] ClientError),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    code: u16,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl AppError {
    fn status_and_message(&self) -> (StatusCode, String, Option<String>) {
        match self {
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized".into(), None),
            AppError::Forbidden => (StatusCode::FORBIDDEN, "Forbidden".into(), None),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "Not Found".into(), Some(msg.clone())),
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "Bad Request".into(), Some(msg.clone()))
            }
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, "Validation Error".into(), Some(msg.clone()))
            }
            AppError::Upstream(err) => upstream_status(err),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error".into(), None)
            }
            AppError::Json(err) => {
                (StatusCode::BAD_REQUEST, "Invalid JSON".into(), Some(err.to_string()))
            }
            AppError::Config(msg) => {
                tracing::error!("Config error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Configuration Error".into(), None)
            }
        }
    }
}

// Session and lookup failures pass through; anything else is the gateway's
// upstream failing.
fn upstream_status(err: &ClientError) -> (StatusCode, String, Option<String>) {
    match err {
        ClientError::AccountDenied | ClientError::TokenExpired | ClientError::SessionTimeout => {
            let status = err.status().unwrap_or(StatusCode::UNAUTHORIZED);
            (status, err.to_string(), None)
        }
        ClientError::InvalidPathSegment(_) => {
            (StatusCode::BAD_REQUEST, "Bad Request".to_string(), Some(err.to_string()))
        }
        _ => match err.status() {
            Some(status @ (StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN | StatusCode::NOT_FOUND)) => (
                status,
                status.canonical_reason().unwrap_or("Error").to_string(),
                err.details().map(str::to_string),
            ),
            Some(status @ (StatusCode::BAD_REQUEST | StatusCode::CONFLICT)) => (
                status,
                "Rejected by records service".to_string(),
                err.details().map(str::to_string),
            ),
            _ => {
                tracing::error!("Upstream error: {}", err);
                (StatusCode::BAD_GATEWAY, "Upstream Error".to_string(), None)
            }
        },
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, details) = self.status_and_message();

        let body = ErrorResponse {
            code: status.as_u16(),
            message,
            details,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for application
pub type AppResult<T> = Result<T, AppError>;

/// Helper trait for converting Option to AppError::NotFound
pub trait OptionExt<T> {
    fn ok_or_not_found(self, msg: impl Into<String>) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self, msg: impl Into<String>) -> AppResult<T> {
        self.ok_or_else(|| AppError::NotFound(msg.into()))
    }
}

/// Helper to convert anyhow errors to AppError
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}
