//! Spacecraft entity types
//!
//! The stored record, its armament list and the status enumeration,
//! plus the draft shape decoded from request bodies before validation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::ValidationError;

/// A stored spacecraft
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spacecraft {
    /// Identity, assigned by the service on creation and never changed
    pub id: Uuid,
    pub name: String,
    pub class: String,
    /// Ordered armament list, persisted as a JSON blob
    pub armaments: Vec<Armament>,
    pub crew: u64,
    /// URL reference of the spacecraft image, absolute or relative
    pub image: String,
    pub value: f64,
    pub status: Status,
}

/// A single armament entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Armament {
    pub title: String,

    /// Free-text quantity ("2", "a few", ...)
    #[serde(rename = "qty")]
    pub quantity: String,
}

impl Armament {
    pub fn new(title: impl Into<String>, quantity: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            quantity: quantity.into(),
        }
    }
}

/// Operational status of a spacecraft
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Operational,
    Damaged,
}

impl Status {
    /// All accepted status values
    pub const ALL: [Status; 2] = [Status::Operational, Status::Damaged];

    /// Wire and column representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Operational => "operational",
            Status::Damaged => "damaged",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Status::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or(ValidationError::InvalidStatus)
    }
}

/// Unvalidated spacecraft fields as decoded from a request body.
///
/// Any `id` in the body is ignored: identity comes from the service on
/// create and from the request path on update. Missing fields decode to
/// their zero values and are then checked by the service.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SpacecraftDraft {
    pub name: String,
    pub class: String,
    pub armaments: Vec<Armament>,
    pub crew: u64,
    pub image: String,
    pub value: f64,
    pub status: String,
}
