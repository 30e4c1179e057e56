//! Mapy.cz geocoding integration
//!
//! Adapter for the public Mapy.cz geocoding API (Czech Republic and
//! neighbourhood).
//!
//! # Features
//!
//! - Forward geocoding: free-text address to candidate coordinates
//! - Reverse geocoding: coordinate to structured address with
//!   administrative levels
//!
//! # Example
//!
//! ```rust,ignore
//! use domain::GeocodeQuery;
//! use integration_mapycz::{AddressProvider, MapyCzConfig, MapyCzProvider};
//!
//! let provider = MapyCzProvider::new(&MapyCzConfig::default())?;
//! let addresses = provider
//!     .geocode(&GeocodeQuery::new("Moravské náměstí 3, Brno")?)
//!     .await?;
//! ```

mod config;
mod error;
mod place;
mod provider;
mod street;
mod transport;
mod xml;

pub use config::{GEOCODE_URL, MapyCzConfig, REVERSE_URL};
pub use error::{GeocodingError, TransportError};
pub use place::PlaceKind;
pub use provider::{AddressProvider, MapyCzProvider, PROVIDER_NAME};
pub use street::{street_name, street_number, strip_prefix_word};
pub use transport::{HttpTransport, ReqwestTransport};
