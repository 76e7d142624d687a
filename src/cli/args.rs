//! CLI argument definitions using clap
//!
//! Commands:
//! - spacecraft-registry serve --config <path> [--port <port>]
//! - spacecraft-registry migrate --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Spacecraft registry - CRUD API for spacecraft records
#[derive(Parser, Debug)]
#[command(name = "spacecraft-registry")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Apply schema migrations and serve the HTTP API
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./spacecraft.json")]
        config: PathBuf,

        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,
    },

    /// Apply schema migrations and exit
    Migrate {
        /// Path to configuration file
        #[arg(long, default_value = "./spacecraft.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
