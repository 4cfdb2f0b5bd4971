use crate::{services::movie_service::StoreError, validation::FieldError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

/// Request-level errors with their JSON wire shapes.
///
/// Not-found and forbidden responses carry a human-readable `message`;
/// validation failures carry the structured per-field `error` list.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    Validation(Vec<FieldError>),
    Forbidden(String),
}

impl AppError {
    /// Shortcut for 404 Not Found.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Shortcut for 403 Forbidden.
    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) | AppError::Forbidden(msg) => {
                write!(f, "{msg}")
            }
            AppError::Validation(errors) => {
                write!(f, "validation failed for {} field(s)", errors.len())
            }
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(json!({ "message": msg }))).into_response()
            }
            AppError::Validation(errors) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": errors }))).into_response()
            }
            AppError::Forbidden(msg) => {
                (StatusCode::FORBIDDEN, Json(json!({ "message": msg }))).into_response()
            }
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::MovieNotFound(_) => AppError::not_found("Movie not found"),
        }
    }
}
