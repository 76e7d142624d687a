//! # Gateway Errors
//!
//! The only place failures become HTTP status codes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::error;

use crate::spacecraft::{ServiceError, ValidationError};

use super::response::ErrorResponse;

/// Result type for gateway handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Gateway errors
#[derive(Debug, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Path identity is not a UUID
    #[error("invalid spacecraft ID provided")]
    InvalidId,

    /// Request body could not be decoded
    #[error("invalid spacecraft provided")]
    InvalidBody,

    /// Input rejected by the service
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Target spacecraft absent
    #[error("spacecraft not found")]
    NotFound,

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Anything else; the detail is logged, never returned
    #[error("internal server error")]
    Internal(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidId => StatusCode::BAD_REQUEST,
            ApiError::InvalidBody => StatusCode::BAD_REQUEST,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(e) => ApiError::Validation(e),
            ServiceError::NotFound => ApiError::NotFound,
            ServiceError::Storage(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(detail) = &self {
            error!(error = %detail, "request failed");
        }

        let status = self.status_code();
        let body = Json(ErrorResponse::new(self.to_string()));
        (status, body).into_response()
    }
}
