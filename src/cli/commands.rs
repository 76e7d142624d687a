//! CLI command implementations
//!
//! `serve` wires database → repository → service → gateway and blocks
//! until shutdown. `migrate` only prepares the schema.

use std::path::Path;
use std::sync::Arc;

use tracing::info;

use crate::http_server::HttpServer;
use crate::observability::setup_tracing;
use crate::spacecraft::SpacecraftService;
use crate::storage::{Database, SqliteSpacecraftRepository};

use super::args::{Cli, Command};
use super::config::Config;
use super::errors::{CliError, CliResult};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, port } => serve(&config, port),
        Command::Migrate { config } => migrate(&config),
    }
}

/// Open the configured database and bring its schema up to date
fn open_database(config: &Config) -> CliResult<Database> {
    let db = Database::open(&config.database_path)?;
    let applied = db.migrate()?;
    info!(applied, "schema up to date");
    Ok(db)
}

/// Apply pending migrations and exit
pub fn migrate(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;
    setup_tracing(&config.log_level);

    open_database(&config)?;
    Ok(())
}

/// Serve the HTTP API until Ctrl-C
pub fn serve(config_path: &Path, port: Option<u16>) -> CliResult<()> {
    let mut config = Config::load(config_path)?;
    if let Some(port) = port {
        config.server.port = port;
    }
    setup_tracing(&config.log_level);

    let db = Arc::new(open_database(&config)?);
    let repo = SqliteSpacecraftRepository::new(db);
    let service = SpacecraftService::new(repo);
    let server = HttpServer::new(config.server.clone(), service);

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::Server(e.to_string()))
    })
}
