//! Embedded schema migrations.
//!
//! Migrations are applied in version order, each inside its own
//! transaction, and recorded in `schema_migrations` so reapplying is a
//! no-op.

use rusqlite::{params, Connection, OptionalExtension};
use tracing::info;

use super::error::{StorageError, StorageResult};

/// A versioned schema change
#[derive(Debug, Clone, Copy)]
pub struct Migration {
    pub version: u32,
    pub name: &'static str,
    pub sql: &'static str,
}

/// All migrations shipped with the binary, ascending by version
pub const MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    name: "create_spacecrafts",
    sql: include_str!("../../migrations/0001_create_spacecrafts.sql"),
}];

const CREATE_MIGRATIONS_TABLE: &str = "CREATE TABLE IF NOT EXISTS schema_migrations (
    version    INTEGER PRIMARY KEY NOT NULL,
    name       TEXT NOT NULL,
    applied_at TEXT NOT NULL DEFAULT (datetime('now'))
)";

/// Apply migrations not yet recorded, returning the number applied
pub(crate) fn apply_pending(conn: &Connection) -> StorageResult<usize> {
    conn.execute_batch(CREATE_MIGRATIONS_TABLE)?;

    let mut applied = 0;
    for migration in MIGRATIONS {
        if is_applied(conn, migration.version)? {
            continue;
        }

        apply(conn, migration).map_err(|e| StorageError::Migration {
            version: migration.version,
            name: migration.name,
            reason: e.to_string(),
        })?;

        info!(version = migration.version, name = migration.name, "applied migration");
        applied += 1;
    }

    Ok(applied)
}

fn is_applied(conn: &Connection, version: u32) -> StorageResult<bool> {
    let found = conn
        .query_row(
            "SELECT version FROM schema_migrations WHERE version = ?1",
            params![version],
            |row| row.get::<_, u32>(0),
        )
        .optional()?;
    Ok(found.is_some())
}

fn apply(conn: &Connection, migration: &Migration) -> rusqlite::Result<()> {
    let tx = conn.unchecked_transaction()?;
    tx.execute_batch(migration.sql)?;
    tx.execute(
        "INSERT INTO schema_migrations (version, name) VALUES (?1, ?2)",
        params![migration.version, migration.name],
    )?;
    tx.commit()
}
