//! # Spacecraft Domain
//!
//! The spacecraft entity, list filters, the repository seam and the
//! service that validates input before it reaches storage.

pub mod entity;
pub mod error;
pub mod filter;
pub mod repository;
pub mod service;

pub use entity::{Armament, Spacecraft, SpacecraftDraft, Status};
pub use error::{ServiceError, ServiceResult, ValidationError};
pub use filter::{Filter, FilterKey};
pub use repository::SpacecraftRepository;
pub use service::SpacecraftService;
