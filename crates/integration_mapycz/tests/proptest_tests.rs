//! Property-based tests for the Mapy.cz provider
//!
//! A canned-body transport replaces the network so properties can run
//! hundreds of cases quickly.

use std::fmt::Write as _;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use bytes::Bytes;
use domain::{GeocodeQuery, ReverseQuery};
use proptest::prelude::*;

use integration_mapycz::{
    AddressProvider, GeocodingError, HttpTransport, MapyCzConfig, MapyCzProvider,
    TransportError, street_name, street_number,
};

#[derive(Debug, Default)]
struct CannedTransport {
    body: String,
    calls: Arc<AtomicUsize>,
}

impl CannedTransport {
    fn new(body: String) -> Self {
        Self {
            body,
            calls: Arc::default(),
        }
    }
}

#[async_trait]
impl HttpTransport for CannedTransport {
    async fn fetch(&self, _url: &str) -> Result<Bytes, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Bytes::from(self.body.clone()))
    }
}

fn provider(body: String) -> MapyCzProvider<CannedTransport> {
    MapyCzProvider::with_transport(CannedTransport::new(body), &MapyCzConfig::for_testing())
}

const SOURCES: [&str; 10] = [
    "addr", "stre", "quar", "ward", "muni", "dist", "regi", "coun", "poi", "osm",
];

/// Build a forward response whose titles all contain `needle`
fn forward_body(needle: &str, sources: &[usize]) -> String {
    let mut body = String::from("<result><point>");
    for (i, source) in sources.iter().enumerate() {
        let _ = write!(
            body,
            r#"<item source="{}" title="{needle} {i}" x="14.{i}" y="50.{i}"/>"#,
            SOURCES[*source]
        );
    }
    body.push_str("</point></result>");
    body
}

proptest! {
    #[test]
    fn geocode_never_exceeds_limit(
        sources in prop::collection::vec(0usize..SOURCES.len(), 0..30),
        limit in 1usize..10
    ) {
        let provider = provider(forward_body("Praha", &sources));
        let query = GeocodeQuery::new("Praha").unwrap().with_limit(limit).unwrap();

        let result = tokio_test::block_on(provider.geocode(&query)).unwrap();

        let accepted = sources.iter().filter(|s| **s < 2).count();
        prop_assert!(result.len() <= limit);
        prop_assert_eq!(result.len(), accepted.min(limit));
    }

    #[test]
    fn geocode_returns_only_address_categories(
        sources in prop::collection::vec(2usize..SOURCES.len(), 1..20)
    ) {
        let provider = provider(forward_body("Brno", &sources));
        let query = GeocodeQuery::new("Brno").unwrap();

        let result = tokio_test::block_on(provider.geocode(&query)).unwrap();
        prop_assert!(result.is_empty());
    }

    #[test]
    fn reverse_echoes_query_coordinates(
        lat in -90.0f64..=90.0,
        lon in -180.0f64..=180.0
    ) {
        let provider = provider(
            r#"<rgeocode><item type="muni" name="Praha" x="1.0" y="2.0"/></rgeocode>"#.to_string(),
        );
        let query = ReverseQuery::new(lat, lon).unwrap();

        let result = tokio_test::block_on(provider.reverse(&query)).unwrap();

        prop_assert_eq!(result.len(), 1);
        let address = result.first().unwrap();
        prop_assert_eq!(address.coordinates(), query.coordinates());
        prop_assert_eq!(address.locality(), Some("Praha"));
    }

    #[test]
    fn ipv4_literals_are_rejected_without_fetching(
        a in 0u8..=255, b in 0u8..=255, c in 0u8..=255, d in 0u8..=255
    ) {
        let transport = CannedTransport::new(String::new());
        let calls = Arc::clone(&transport.calls);
        let provider = MapyCzProvider::with_transport(transport, &MapyCzConfig::for_testing());
        let query = GeocodeQuery::new(format!("{a}.{b}.{c}.{d}")).unwrap();

        let result = tokio_test::block_on(provider.geocode(&query));
        prop_assert!(matches!(result, Err(GeocodingError::UnsupportedOperation(_))));
        prop_assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn ipv6_literals_are_rejected(segments in prop::array::uniform8(any::<u16>())) {
        let text = segments
            .iter()
            .map(|s| format!("{s:x}"))
            .collect::<Vec<_>>()
            .join(":");
        let provider = provider(String::new());
        let query = GeocodeQuery::new(text).unwrap();

        let result = tokio_test::block_on(provider.geocode(&query));
        prop_assert!(matches!(result, Err(GeocodingError::UnsupportedOperation(_))));
    }

    #[test]
    fn street_number_is_recovered_from_address_name(
        name in "[A-T][a-z]{2,12}( [a-z]{2,8})?",
        house in 1u32..9999,
        orientation in proptest::option::of(1u32..200)
    ) {
        let number = orientation.map_or_else(|| house.to_string(), |o| format!("{house}/{o}"));
        let facet = format!("{name} {number}");

        prop_assert_eq!(street_number(&facet), Some(number.as_str()));
        prop_assert_eq!(street_name(&facet), Some(name.as_str()));
    }
}
