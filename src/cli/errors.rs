//! CLI-specific error types
//!
//! All CLI errors are fatal: the process prints them and exits non-zero.

use std::io;

use thiserror::Error;

use crate::storage::StorageError;

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file unreadable or invalid
    #[error("config error: {0}")]
    Config(String),

    /// Runtime or socket I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Database could not be opened or migrated
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// HTTP server stopped with an error
    #[error("server error: {0}")]
    Server(String),
}

impl CliError {
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Short machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            Self::Config(_) => "SPACECRAFT_CLI_CONFIG_ERROR",
            Self::Io(_) => "SPACECRAFT_CLI_IO_ERROR",
            Self::Storage(_) => "SPACECRAFT_CLI_STORAGE_ERROR",
            Self::Server(_) => "SPACECRAFT_CLI_SERVER_ERROR",
        }
    }
}
