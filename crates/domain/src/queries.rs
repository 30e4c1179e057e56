//! Geocoding query value objects
//!
//! Queries are built by the caller, immutable, and consumed once by a provider.

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::value_objects::GeoLocation;

/// Number of results a forward query asks for unless told otherwise
pub const DEFAULT_RESULT_LIMIT: usize = 5;

/// Forward geocoding request: free-form address text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeocodeQuery {
    text: String,
    limit: usize,
}

impl GeocodeQuery {
    /// Create a query with the default limit
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidQuery`] if the text is empty or only whitespace.
    pub fn new(text: impl Into<String>) -> Result<Self, DomainError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(DomainError::InvalidQuery(
                "geocode text must not be empty".to_string(),
            ));
        }
        Ok(Self {
            text,
            limit: DEFAULT_RESULT_LIMIT,
        })
    }

    /// Replace the maximum number of results
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidQuery`] if `limit` is zero.
    pub fn with_limit(self, limit: usize) -> Result<Self, DomainError> {
        if limit == 0 {
            return Err(DomainError::InvalidQuery(
                "limit must be greater than 0".to_string(),
            ));
        }
        Ok(Self { limit, ..self })
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }
}

/// Reverse geocoding request: a coordinate pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReverseQuery {
    coordinates: GeoLocation,
}

impl ReverseQuery {
    /// Create a query from raw degrees
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidCoordinates`] for out-of-range values.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, DomainError> {
        Ok(Self::from_location(GeoLocation::new(latitude, longitude)?))
    }

    #[must_use]
    pub const fn from_location(coordinates: GeoLocation) -> Self {
        Self { coordinates }
    }

    #[must_use]
    pub const fn coordinates(&self) -> GeoLocation {
        self.coordinates
    }
}
