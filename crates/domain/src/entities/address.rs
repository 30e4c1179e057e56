//! Structured postal address produced by a geocoding provider

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::value_objects::{AdminLevel, AdminLevels, GeoLocation};

/// A normalised address candidate
///
/// Built incrementally through [`AddressBuilder`] and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    provided_by: String,
    coordinates: GeoLocation,
    #[serde(skip_serializing_if = "Option::is_none")]
    street_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    street_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    locality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    country: Option<String>,
    #[serde(default, skip_serializing_if = "AdminLevels::is_empty")]
    admin_levels: AdminLevels,
}

impl Address {
    /// Name of the provider that produced this address
    #[must_use]
    pub fn provided_by(&self) -> &str {
        &self.provided_by
    }

    #[must_use]
    pub const fn coordinates(&self) -> GeoLocation {
        self.coordinates
    }

    #[must_use]
    pub fn street_name(&self) -> Option<&str> {
        self.street_name.as_deref()
    }

    #[must_use]
    pub fn street_number(&self) -> Option<&str> {
        self.street_number.as_deref()
    }

    #[must_use]
    pub fn locality(&self) -> Option<&str> {
        self.locality.as_deref()
    }

    #[must_use]
    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    #[must_use]
    pub const fn admin_levels(&self) -> &AdminLevels {
        &self.admin_levels
    }

    /// Single-line human readable form, e.g.
    /// `Moravské náměstí 127/3, Brno, Česko`
    #[must_use]
    pub fn format_line(&self) -> String {
        let street = match (self.street_name(), self.street_number()) {
            (Some(name), Some(number)) => Some(format!("{name} {number}")),
            (Some(name), None) => Some(name.to_string()),
            (None, Some(number)) => Some(number.to_string()),
            (None, None) => None,
        };

        let parts: Vec<String> = [street, self.locality.clone(), self.country.clone()]
            .into_iter()
            .flatten()
            .collect();

        if parts.is_empty() {
            self.coordinates.to_string()
        } else {
            parts.join(", ")
        }
    }
}

/// Incremental builder for [`Address`]
///
/// Setters overwrite earlier values; empty strings are dropped on [`build`](Self::build).
#[derive(Debug, Clone)]
pub struct AddressBuilder {
    provided_by: String,
    coordinates: GeoLocation,
    street_name: Option<String>,
    street_number: Option<String>,
    locality: Option<String>,
    country: Option<String>,
    admin_levels: AdminLevels,
}

impl AddressBuilder {
    /// Start a new address for the given provider and coordinates
    #[must_use]
    pub fn new(provided_by: impl Into<String>, coordinates: GeoLocation) -> Self {
        Self {
            provided_by: provided_by.into(),
            coordinates,
            street_name: None,
            street_number: None,
            locality: None,
            country: None,
            admin_levels: AdminLevels::new(),
        }
    }

    pub fn street_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.street_name = Some(name.into());
        self
    }

    pub fn street_number(&mut self, number: impl Into<String>) -> &mut Self {
        self.street_number = Some(number.into());
        self
    }

    pub fn locality(&mut self, locality: impl Into<String>) -> &mut Self {
        self.locality = Some(locality.into());
        self
    }

    pub fn country(&mut self, country: impl Into<String>) -> &mut Self {
        self.country = Some(country.into());
        self
    }

    /// Set an administrative level, replacing any earlier value for it
    ///
    /// An empty name clears the level, like the empty-string setters.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidAdminLevel`] for an unsupported level.
    pub fn add_admin_level(
        &mut self,
        level: u8,
        name: impl Into<String>,
    ) -> Result<&mut Self, DomainError> {
        let level = AdminLevel::new(level, name)?;
        if level.name().is_empty() {
            self.admin_levels.remove(level.level());
        } else {
            self.admin_levels.insert(level);
        }
        Ok(self)
    }

    /// Finish the address
    #[must_use]
    pub fn build(&self) -> Address {
        Address {
            provided_by: self.provided_by.clone(),
            coordinates: self.coordinates,
            street_name: non_empty(self.street_name.as_deref()),
            street_number: non_empty(self.street_number.as_deref()),
            locality: non_empty(self.locality.as_deref()),
            country: non_empty(self.country.as_deref()),
            admin_levels: self.admin_levels.clone(),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}
