//! # List Filters
//!
//! Equality filters narrowing a spacecraft listing. Keys are restricted
//! to a fixed allow-list; several filters combine with AND.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ValidationError;

/// Filterable fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterKey {
    Name,
    Class,
    Status,
}

impl FilterKey {
    /// The allow-list, in the order the gateway collects query parameters
    pub const ALL: [FilterKey; 3] = [FilterKey::Name, FilterKey::Class, FilterKey::Status];

    /// Get the key string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterKey::Name => "name",
            FilterKey::Class => "class",
            FilterKey::Status => "status",
        }
    }
}

impl fmt::Display for FilterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterKey {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FilterKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| ValidationError::InvalidFilter(s.to_string()))
    }
}

/// A single `key = value` filter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    pub key: String,
    pub value: String,
}

impl Filter {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Create a filter on an allow-listed key
    pub fn eq(key: FilterKey, value: impl Into<String>) -> Self {
        Self::new(key.as_str(), value)
    }

    /// Resolve the key against the allow-list
    pub fn parsed_key(&self) -> Result<FilterKey, ValidationError> {
        self.key.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_keys() {
        for key in ["name", "class", "status"] {
            assert_eq!(Filter::new(key, "x").parsed_key().unwrap().as_str(), key);
        }
    }

    #[test]
    fn test_unknown_key_rejected() {
        for key in ["id", "crew", "NAME", "name; DROP TABLE spacecrafts", ""] {
            assert_eq!(
                Filter::new(key, "x").parsed_key(),
                Err(ValidationError::InvalidFilter(key.to_string()))
            );
        }
    }
}
