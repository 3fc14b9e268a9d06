//! # Course API Errors
//!
//! Errors surfaced as HTTP status codes. In the default lenient mode only
//! `Store` errors reach clients; the rest are produced in strict mode.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::courses::{CodecError, StoreError};

/// Result type for course handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Course API errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// Body could not be decoded
    #[error("{0}")]
    InvalidBody(#[from] CodecError),

    /// Body decoded but carries no course name
    #[error("Course name is required")]
    MissingName,

    /// No course with the requested id
    #[error("Course not found: {0}")]
    NotFound(String),

    #[error("{0}")]
    Store(#[from] StoreError),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::MissingName => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(ErrorResponse::from(&self))).into_response()
    }
}
