//! Mapy.cz geocoding CLI
//!
//! Command-line client for forward and reverse geocoding against Mapy.cz.

#![allow(clippy::print_stdout)]

mod settings;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use domain::{AddressCollection, DEFAULT_RESULT_LIMIT, GeocodeQuery, ReverseQuery};
use integration_mapycz::{AddressProvider, MapyCzProvider};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Mapy.cz geocoding CLI
#[derive(Parser)]
#[command(name = "mapycz-cli")]
#[command(author, version, about = "Mapy.cz geocoding client", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Configuration file (default: ./mapycz.toml if present)
    #[arg(short, long, env = "MAPYCZ_CONFIG")]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find coordinates for an address
    ///
    /// Example: mapycz-cli geocode "Moravské náměstí 3, Brno"
    Geocode {
        /// Address text
        text: String,

        /// Maximum number of results
        #[arg(short, long, default_value_t = DEFAULT_RESULT_LIMIT)]
        limit: usize,
    },

    /// Find the address at a coordinate
    ///
    /// Example: mapycz-cli reverse 49.1974 16.6082
    #[command(allow_negative_numbers = true)]
    Reverse {
        /// Latitude in degrees
        latitude: f64,

        /// Longitude in degrees
        longitude: f64,
    },
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Render addresses one per line, numbered from 1
fn format_human(addresses: &AddressCollection) -> String {
    if addresses.is_empty() {
        return "No results".to_string();
    }

    addresses
        .iter()
        .enumerate()
        .map(|(i, address)| {
            format!(
                "{}. {} ({})",
                i + 1,
                address.format_line(),
                address.coordinates()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = log_filter_from_verbosity(cli.verbose);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = settings::load(cli.config.as_deref()).context("failed to load configuration")?;
    debug!(?config, "Configuration loaded");

    let provider = MapyCzProvider::new(&config)?;

    let addresses = match cli.command {
        Commands::Geocode { text, limit } => {
            let query = GeocodeQuery::new(text)?.with_limit(limit)?;
            provider.geocode(&query).await?
        },
        Commands::Reverse {
            latitude,
            longitude,
        } => {
            let query = ReverseQuery::new(latitude, longitude)?;
            provider.reverse(&query).await?
        },
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&addresses)?);
    } else {
        println!("{}", format_human(&addresses));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use domain::{AddressBuilder, GeoLocation};

    use super::*;

    fn parse_args(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(args)
    }

    #[test]
    fn log_filter_verbosity_zero() {
        assert_eq!(log_filter_from_verbosity(0), "warn");
    }

    #[test]
    fn log_filter_verbosity_one() {
        assert_eq!(log_filter_from_verbosity(1), "info");
    }

    #[test]
    fn log_filter_verbosity_two() {
        assert_eq!(log_filter_from_verbosity(2), "debug");
    }

    #[test]
    fn log_filter_verbosity_three_or_more() {
        assert_eq!(log_filter_from_verbosity(3), "trace");
        assert_eq!(log_filter_from_verbosity(10), "trace");
    }

    #[test]
    fn cli_parses_geocode_with_default_limit() {
        let cli = parse_args(&["mapycz-cli", "geocode", "Brno"]).unwrap();
        match cli.command {
            Commands::Geocode { text, limit } => {
                assert_eq!(text, "Brno");
                assert_eq!(limit, 5);
            },
            Commands::Reverse { .. } => panic!("Expected Geocode command"),
        }
        assert!(!cli.json);
        assert!(cli.config.is_none());
    }

    #[test]
    fn cli_parses_geocode_with_limit() {
        let cli = parse_args(&["mapycz-cli", "geocode", "Nad Vodojemem", "--limit", "2"]).unwrap();
        assert!(matches!(cli.command, Commands::Geocode { limit: 2, .. }));
    }

    #[test]
    fn cli_parses_reverse_with_negative_coordinates() {
        let cli = parse_args(&["mapycz-cli", "reverse", "-33.8688", "-151.2093"]).unwrap();
        match cli.command {
            Commands::Reverse {
                latitude,
                longitude,
            } => {
                assert!((latitude + 33.8688).abs() < f64::EPSILON);
                assert!((longitude + 151.2093).abs() < f64::EPSILON);
            },
            Commands::Geocode { .. } => panic!("Expected Reverse command"),
        }
    }

    #[test]
    fn cli_parses_global_flags() {
        let cli = parse_args(&[
            "mapycz-cli",
            "-vv",
            "--json",
            "--config",
            "/etc/mapycz.toml",
            "reverse",
            "49.1974",
            "16.6082",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.json);
        assert_eq!(cli.config, Some(PathBuf::from("/etc/mapycz.toml")));
    }

    #[test]
    fn cli_rejects_missing_subcommand() {
        assert!(parse_args(&["mapycz-cli"]).is_err());
    }

    #[test]
    fn cli_rejects_non_numeric_coordinates() {
        assert!(parse_args(&["mapycz-cli", "reverse", "north", "16.6"]).is_err());
    }

    #[test]
    fn format_human_empty() {
        assert_eq!(format_human(&AddressCollection::default()), "No results");
    }

    #[test]
    fn format_human_numbers_lines() {
        let mut builder =
            AddressBuilder::new("mapy_cz", GeoLocation::new(49.1974, 16.6082).unwrap());
        builder.street_name("Moravské náměstí").locality("Brno");
        let first = builder.build();
        let second =
            AddressBuilder::new("mapy_cz", GeoLocation::new(50.0617, 14.4573).unwrap()).build();

        let output = format_human(&AddressCollection::new(vec![first, second]));
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(
            lines,
            vec![
                "1. Moravské náměstí, Brno (49.197400, 16.608200)",
                "2. 50.061700, 14.457300 (50.061700, 14.457300)",
            ]
        );
    }
}
