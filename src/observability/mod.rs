//! Observability for the spacecraft registry
//!
//! Structured logging through `tracing`. Request spans come from the
//! `TraceLayer` installed by the HTTP server.

use tracing_subscriber::EnvFilter;

/// Log levels accepted in configuration
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Install the global fmt subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_level` applies. Calling
/// this more than once leaves the first subscriber in place.
pub fn setup_tracing(default_level: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .try_init();
}

/// Whether `level` is a recognised log level
pub fn is_valid_level(level: &str) -> bool {
    LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str())
}
