// src/error.rs

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

/// Global Application Error Enum.
/// Every error kind the aggregators can signal, plus the mapping to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    // 401 Unauthorized: no valid caller identity
    Unauthorized(String),

    // 400 Bad Request: malformed course identifier
    InvalidInput(String),

    // 404 Not Found: session identity is not a known student
    StudentNotFound,

    // 404 Not Found: no score for the requested course
    NotFound(String),

    // 500: the score store failed
    StoreUnavailable(String),

    // 500: any other server-side failure
    InternalServerError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Unauthorized(msg) => write!(f, "unauthorized: {msg}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            AppError::StudentNotFound => write!(f, "student not found"),
            AppError::NotFound(msg) => write!(f, "not found: {msg}"),
            AppError::StoreUnavailable(msg) => write!(f, "score store unavailable: {msg}"),
            AppError::InternalServerError(msg) => write!(f, "internal error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

/// Converts the error into a JSON response with appropriate HTTP status code.
/// Server-side causes are logged and replaced with a generic message.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::StudentNotFound => (StatusCode::NOT_FOUND, "Student not found".to_string()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::StoreUnavailable(msg) => {
                tracing::error!("Score store unavailable: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal Server Error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };
        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

/// Any database failure surfaces as `StoreUnavailable`.
/// Allows using `?` operator on store queries.
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::StoreUnavailable(err.to_string())
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        AppError::InternalServerError(err.to_string())
    }
}
