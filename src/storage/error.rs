//! Storage error types

use thiserror::Error;

/// Storage result type
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors raised by the SQLite store
#[derive(Debug, Error)]
pub enum StorageError {
    /// No row matched the primary key
    #[error("row not found")]
    NotFound,

    /// SQLite operation failure
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Armaments blob could not be encoded or decoded
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A stored row holds a value the domain cannot represent
    #[error("corrupt row: {0}")]
    Corrupt(String),

    /// A domain value does not fit its column
    #[error("{field} {value} does not fit in an INTEGER column")]
    OutOfRange { field: &'static str, value: u64 },

    /// Filter key has no matching column
    #[error("unknown filter column: {0}")]
    UnknownFilter(String),

    /// Connection mutex poisoned by a panicking holder
    #[error("connection lock poisoned")]
    LockPoisoned,

    /// Migration lifecycle failure
    #[error("migration {version} ({name}) failed: {reason}")]
    Migration {
        version: u32,
        name: &'static str,
        reason: String,
    },
}
