//! Administrative level value objects
//!
//! An address sits inside a hierarchy of administrative units. Level 1 is
//! the coarsest (region) and higher numbers are finer grained.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Deepest administrative level an address can carry
pub const MAX_ADMIN_LEVEL: u8 = 5;

/// A single named rung of the administrative hierarchy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminLevel {
    level: u8,
    name: String,
}

impl AdminLevel {
    /// Create a new admin level
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidAdminLevel`] when `level` is not in
    /// `1..=MAX_ADMIN_LEVEL`.
    pub fn new(level: u8, name: impl Into<String>) -> Result<Self, DomainError> {
        if !(1..=MAX_ADMIN_LEVEL).contains(&level) {
            return Err(DomainError::InvalidAdminLevel(level));
        }
        Ok(Self {
            level,
            name: name.into(),
        })
    }

    /// Level number, 1 being the coarsest
    #[must_use]
    pub const fn level(&self) -> u8 {
        self.level
    }

    /// Display name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Admin levels of an address, keyed by level number
///
/// Inserting a level that is already present replaces the earlier entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdminLevels {
    levels: BTreeMap<u8, AdminLevel>,
}

impl AdminLevels {
    /// Create an empty set of admin levels
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a level, returning the entry it replaced
    pub fn insert(&mut self, level: AdminLevel) -> Option<AdminLevel> {
        self.levels.insert(level.level(), level)
    }

    /// Remove a level, returning the entry it held
    pub fn remove(&mut self, level: u8) -> Option<AdminLevel> {
        self.levels.remove(&level)
    }

    /// Look up a level by number
    #[must_use]
    pub fn get(&self, level: u8) -> Option<&AdminLevel> {
        self.levels.get(&level)
    }

    /// Name of a level, if set
    #[must_use]
    pub fn name(&self, level: u8) -> Option<&str> {
        self.get(level).map(AdminLevel::name)
    }

    /// Number of levels set
    #[must_use]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// True when no level is set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Iterate from the coarsest to the finest level
    pub fn iter(&self) -> impl Iterator<Item = &AdminLevel> {
        self.levels.values()
    }
}
