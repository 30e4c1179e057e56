//! Mapy.cz address provider
//!
//! Forward geocoding turns free text into candidate coordinates via
//! `/geocode`; reverse geocoding turns a coordinate into a structured
//! address via `/rgeocode`. Both endpoints answer with XML whose payload is
//! carried in element attributes.

use std::collections::BTreeMap;
use std::net::IpAddr;

use async_trait::async_trait;
use domain::{
    AddressBuilder, AddressCollection, DomainError, GeoLocation, GeocodeQuery, ReverseQuery,
};
use tracing::{debug, instrument, warn};
use url::Url;

use crate::config::MapyCzConfig;
use crate::error::GeocodingError;
use crate::place::PlaceKind;
use crate::street::{street_name, street_number, strip_prefix_word};
use crate::transport::{HttpTransport, ReqwestTransport};
use crate::xml::{XmlNode, parse_document};

/// Name reported as `provided_by` on every address from this provider
pub const PROVIDER_NAME: &str = "mapy_cz";

/// A geocoding backend
#[async_trait]
pub trait AddressProvider: Send + Sync {
    /// Short identifier of the provider
    fn name(&self) -> &'static str;

    /// Resolve address text to candidate coordinates
    async fn geocode(&self, query: &GeocodeQuery) -> Result<AddressCollection, GeocodingError>;

    /// Resolve a coordinate to a structured address
    async fn reverse(&self, query: &ReverseQuery) -> Result<AddressCollection, GeocodingError>;
}

/// [`AddressProvider`] for the Mapy.cz API
///
/// Holds no mutable state; concurrent calls are safe whenever the transport
/// is.
#[derive(Debug)]
pub struct MapyCzProvider<T = ReqwestTransport> {
    transport: T,
    config: MapyCzConfig,
}

impl MapyCzProvider {
    /// Create a provider that talks to Mapy.cz over `reqwest`
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &MapyCzConfig) -> Result<Self, GeocodingError> {
        config.validate().map_err(GeocodingError::Configuration)?;
        Ok(Self::with_transport(ReqwestTransport::new(config)?, config))
    }
}

impl<T: HttpTransport> MapyCzProvider<T> {
    /// Create a provider over an arbitrary transport
    pub fn with_transport(transport: T, config: &MapyCzConfig) -> Self {
        Self {
            transport,
            config: config.clone(),
        }
    }

    /// Fetch `endpoint` with `params` and parse the body as XML
    async fn execute_query(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<XmlNode, GeocodingError> {
        let url = Url::parse_with_params(endpoint, params)
            .map_err(|e| GeocodingError::Configuration(format!("{endpoint}: {e}")))?;

        debug!(%url, "Querying Mapy.cz");

        let body = self.transport.fetch(url.as_str()).await.map_err(|e| {
            warn!(error = %e, "Mapy.cz request failed");
            GeocodingError::from(e)
        })?;

        parse_document(&body).map_err(|e| {
            warn!(error = %e, "Mapy.cz returned an unreadable body");
            invalid_response(params, e.to_string())
        })
    }
}

#[async_trait]
impl<T: HttpTransport> AddressProvider for MapyCzProvider<T> {
    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }

    #[instrument(skip(self, query), fields(text = %query.text(), limit = query.limit()))]
    async fn geocode(&self, query: &GeocodeQuery) -> Result<AddressCollection, GeocodingError> {
        let text = query.text();
        if is_ip_address(text) {
            return Err(GeocodingError::UnsupportedOperation(
                "IP address geocoding not supported".to_string(),
            ));
        }

        let params = [("query", text.to_string())];
        let document = self.execute_query(&self.config.geocode_url, &params).await?;

        // A lone candidate is trusted even when its title differs from the query
        let items = document.child("point").map(XmlNode::children).unwrap_or_default();
        let check_title = items.len() > 1;
        let needle = text.to_lowercase();

        let mut addresses = Vec::new();
        for item in items {
            if addresses.len() == query.limit() {
                break;
            }

            let title = item.attr("title").unwrap_or_default();
            if check_title && !title.to_lowercase().contains(&needle) {
                debug!(%title, "Skipping candidate whose title does not match");
                continue;
            }

            let source = item.attr("source").unwrap_or_default();
            if !PlaceKind::from_code(source).is_some_and(PlaceKind::is_geocodable) {
                debug!(%source, %title, "Skipping candidate of non-address category");
                continue;
            }

            let coordinates =
                item_coordinates(item).map_err(|reason| invalid_response(&params, reason))?;
            addresses.push(AddressBuilder::new(PROVIDER_NAME, coordinates).build());
        }

        debug!(
            candidates = items.len(),
            accepted = addresses.len(),
            "Geocoding finished"
        );
        Ok(AddressCollection::new(addresses))
    }

    #[instrument(skip(self, query), fields(coordinates = %query.coordinates()))]
    async fn reverse(&self, query: &ReverseQuery) -> Result<AddressCollection, GeocodingError> {
        let coordinates = query.coordinates();
        let params = [
            ("lat", coordinates.latitude().to_string()),
            ("lon", coordinates.longitude().to_string()),
        ];
        let document = self.execute_query(&self.config.reverse_url, &params).await?;

        // Mapy.cz does not echo authoritative coordinates; keep the caller's
        let mut builder = AddressBuilder::new(PROVIDER_NAME, coordinates);
        for facet in document.children() {
            let Some(kind) = facet.attr("type").and_then(PlaceKind::from_code) else {
                continue;
            };
            apply_facet(&mut builder, kind, facet.attr("name").unwrap_or_default())?;
        }

        Ok(AddressCollection::new(vec![builder.build()]))
    }
}

/// Copy one reverse-geocoding facet onto the address
///
/// Later facets of the same kind overwrite earlier ones.
fn apply_facet(
    builder: &mut AddressBuilder,
    kind: PlaceKind,
    name: &str,
) -> Result<(), DomainError> {
    match kind {
        PlaceKind::Address => {
            // Two independent attempts: either, both or neither may match.
            // A match without a name clears the street name.
            if let Some(number) = street_number(name) {
                builder.street_number(number);
            }
            if let Some(street) = street_name(name) {
                builder.street_name(street);
            }
        },
        PlaceKind::Street => {
            builder.street_name(strip_prefix_word(name, "ulice"));
        },
        PlaceKind::Quarter => {
            builder.add_admin_level(4, name)?;
        },
        PlaceKind::Ward => {
            builder.add_admin_level(3, strip_prefix_word(name, "část obce"))?;
        },
        PlaceKind::Municipality => {
            builder.locality(name);
        },
        PlaceKind::District => {
            builder.add_admin_level(2, strip_prefix_word(name, "okres"))?;
        },
        PlaceKind::Region => {
            builder.add_admin_level(1, name)?;
        },
        PlaceKind::Country => {
            builder.country(name);
        },
    }
    Ok(())
}

/// Read `y`/`x` of a forward candidate as latitude/longitude
fn item_coordinates(item: &XmlNode) -> Result<GeoLocation, String> {
    let parse = |key: &str| -> Result<f64, String> {
        let raw = item
            .attr(key)
            .ok_or_else(|| format!("candidate without `{key}` attribute"))?;
        raw.trim()
            .parse()
            .map_err(|_| format!("candidate `{key}` is not a number: {raw}"))
    };

    GeoLocation::new(parse("y")?, parse("x")?).map_err(|e| e.to_string())
}

fn is_ip_address(text: &str) -> bool {
    text.trim().parse::<IpAddr>().is_ok()
}

fn invalid_response(params: &[(&str, String)], reason: impl Into<String>) -> GeocodingError {
    let params: BTreeMap<&str, &str> = params.iter().map(|(k, v)| (*k, v.as_str())).collect();
    GeocodingError::InvalidServerResponse {
        params: serde_json::to_string(&params).unwrap_or_default(),
        reason: reason.into(),
    }
}
