//! spacecraft-registry - CRUD HTTP API for spacecraft records
//!
//! Three layers, leaf first:
//! - `storage`: SQLite repository and schema migrations
//! - `spacecraft`: entity, filters and the validating service
//! - `http_server`: axum gateway mapping failures to status codes

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod spacecraft;
pub mod storage;
