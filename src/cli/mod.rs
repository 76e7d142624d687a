//! CLI module for the spacecraft registry
//!
//! Provides command-line interface for:
//! - serve: migrate the database and run the HTTP API
//! - migrate: apply schema migrations only

mod args;
mod commands;
mod config;
mod errors;

pub use args::{Cli, Command};
pub use commands::{migrate, run, run_command, serve};
pub use config::Config;
pub use errors::{CliError, CliResult};
