//! Domain error types
//!
//! Validation failures are always caused by the client. Everything the
//! repository reports, apart from a missing row, passes through as an
//! opaque storage failure.

use thiserror::Error;

use crate::storage::StorageError;

/// Service result type
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Rejected input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Image is not an absolute URL
    #[error("invalid image")]
    InvalidImage,

    /// Status is not one of the enumerated values
    #[error("invalid status")]
    InvalidStatus,

    /// Filter key is not in the allow-list
    #[error("invalid filter: {0}")]
    InvalidFilter(String),
}

/// Spacecraft service errors
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Target row absent
    #[error("spacecraft not found")]
    NotFound,

    #[error("storage error: {0}")]
    Storage(StorageError),
}

impl From<StorageError> for ServiceError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound => ServiceError::NotFound,
            other => ServiceError::Storage(other),
        }
    }
}
