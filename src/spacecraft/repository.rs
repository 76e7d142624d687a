//! Repository seam between the service and the relational store.

use uuid::Uuid;

use crate::storage::StorageResult;

use super::entity::Spacecraft;
use super::filter::Filter;

/// Persistence operations for spacecraft.
///
/// Each call issues a single statement. A missing target row is reported
/// as [`StorageError::NotFound`](crate::storage::StorageError::NotFound).
pub trait SpacecraftRepository: Send + Sync {
    /// List spacecraft matching every filter; empty filters list all rows
    fn list(&self, filters: &[Filter]) -> StorageResult<Vec<Spacecraft>>;

    /// Fetch a single spacecraft by id
    fn get(&self, id: Uuid) -> StorageResult<Spacecraft>;

    /// Insert a new spacecraft
    fn create(&self, spacecraft: &Spacecraft) -> StorageResult<()>;

    /// Replace every field of an existing spacecraft
    fn update(&self, spacecraft: &Spacecraft) -> StorageResult<()>;

    /// Remove a spacecraft
    fn delete(&self, id: Uuid) -> StorageResult<()>;
}
