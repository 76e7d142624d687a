//! Configuration file
//!
//! A JSON file; every field has a default and a missing file means
//! "all defaults".
//!
//! ```json
//! {
//!   "database_path": "./spacecraft.db",
//!   "log_level": "info",
//!   "server": { "host": "127.0.0.1", "port": 8080, "delete_no_content": false }
//! }
//! ```

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::http_server::HttpServerConfig;
use crate::observability;

use super::errors::{CliError, CliResult};

/// Process configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// SQLite database file; `:memory:` for a throwaway in-memory store
    #[serde(default = "default_database_path")]
    pub database_path: String,

    /// Fallback log level when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// HTTP server settings
    #[serde(default)]
    pub server: HttpServerConfig,
}

fn default_database_path() -> String {
    "./spacecraft.db".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            log_level: default_log_level(),
            server: HttpServerConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file, falling back to defaults if absent
    pub fn load(path: &Path) -> CliResult<Self> {
        let config = match fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content)
                .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => Config::default(),
            Err(e) => {
                return Err(CliError::config_error(format!(
                    "Failed to read config {}: {}",
                    path.display(),
                    e
                )))
            }
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        if self.database_path.trim().is_empty() {
            return Err(CliError::config_error("database_path must not be empty"));
        }

        if !observability::is_valid_level(&self.log_level) {
            return Err(CliError::config_error(format!(
                "Invalid log_level: '{}'. Must be one of {}.",
                self.log_level,
                observability::LOG_LEVELS.join(", ")
            )));
        }

        if self.server.host.trim().is_empty() {
            return Err(CliError::config_error("server.host must not be empty"));
        }

        if self.server.port == 0 {
            return Err(CliError::config_error("server.port must be > 0"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(tmp: &TempDir, content: &str) -> std::path::PathBuf {
        let path = tmp.path().join("spacecraft.json");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = Config::load(&tmp.path().join("absent.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(
            &tmp,
            r#"{"database_path": ":memory:", "server": {"port": 9000, "delete_no_content": true}}"#,
        );

        let config = Config::load(&path).unwrap();
        assert_eq!(config.database_path, ":memory:");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert!(config.server.delete_no_content);
    }

    #[test]
    fn test_invalid_json() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(&tmp, "{ not json");
        assert!(matches!(Config::load(&path), Err(CliError::Config(_))));
    }

    #[test]
    fn test_validation() {
        let tmp = TempDir::new().unwrap();

        for content in [
            r#"{"database_path": ""}"#,
            r#"{"log_level": "loud"}"#,
            r#"{"server": {"port": 0}}"#,
            r#"{"server": {"host": " "}}"#,
        ] {
            let path = write_config(&tmp, content);
            assert!(
                matches!(Config::load(&path), Err(CliError::Config(_))),
                "{content}"
            );
        }
    }
}
