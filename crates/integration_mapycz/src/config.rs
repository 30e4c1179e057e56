//! Mapy.cz provider configuration

use serde::{Deserialize, Serialize};

/// Forward geocoding endpoint
pub const GEOCODE_URL: &str = "https://api.mapy.cz/geocode";

/// Reverse geocoding endpoint
pub const REVERSE_URL: &str = "https://api.mapy.cz/rgeocode";

/// Configuration for the Mapy.cz geocoding provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapyCzConfig {
    /// Forward geocoding endpoint URL
    #[serde(default = "default_geocode_url")]
    pub geocode_url: String,

    /// Reverse geocoding endpoint URL
    #[serde(default = "default_reverse_url")]
    pub reverse_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_geocode_url() -> String {
    GEOCODE_URL.to_string()
}

fn default_reverse_url() -> String {
    REVERSE_URL.to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    format!("mapycz-geocoder/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for MapyCzConfig {
    fn default() -> Self {
        Self {
            geocode_url: default_geocode_url(),
            reverse_url: default_reverse_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl MapyCzConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            timeout_secs: 5,
            ..Default::default()
        }
    }

    /// Point both endpoints at another host, keeping the Mapy.cz paths
    ///
    /// Used to aim the provider at a mock server or a proxy.
    #[must_use]
    pub fn with_base_url(self, base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            geocode_url: format!("{base}/geocode"),
            reverse_url: format!("{base}/rgeocode"),
            ..self
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        for (field, value) in [
            ("geocode_url", &self.geocode_url),
            ("reverse_url", &self.reverse_url),
        ] {
            if value.is_empty() {
                return Err(format!("{field} must not be empty"));
            }
            url::Url::parse(value).map_err(|e| format!("{field} is not a valid URL: {e}"))?;
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        Ok(())
    }
}
