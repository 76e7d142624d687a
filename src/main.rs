//! Spacecraft registry entry point
//!
//! Parses the command line and delegates to the CLI module; errors are
//! printed to stderr with a non-zero exit code.

use spacecraft_registry::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}: {}", e.code(), e);
        std::process::exit(1);
    }
}
