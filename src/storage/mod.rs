//! SQLite storage for spacecraft records
//!
//! One `spacecrafts` table holds a column per scalar field and a TEXT
//! column with the armament list serialized as JSON. There is no child
//! table for armaments.
//!
//! # Design Principles
//!
//! - One statement per repository call, no request-spanning transactions
//! - The connection is an explicit handle passed to the repository
//! - Filter values are always bound parameters; filter keys map to
//!   columns through the allow-list only
//! - Schema is created by embedded, idempotent migrations

mod database;
mod error;
mod migration;
mod sqlite;

pub use database::Database;
pub use error::{StorageError, StorageResult};
pub use migration::{Migration, MIGRATIONS};
pub use sqlite::SqliteSpacecraftRepository;
