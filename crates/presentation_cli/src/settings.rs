//! Configuration loading for the CLI
//!
//! Sources, lowest priority first:
//! 1. Built-in defaults of [`MapyCzConfig`]
//! 2. `mapycz.toml` in the working directory, or the file given by `--config`
//! 3. `MAPYCZ__*` environment variables (e.g. `MAPYCZ__TIMEOUT_SECS=30`)

use std::path::Path;

use config::{Config, ConfigError, Environment, File, Map};
use integration_mapycz::MapyCzConfig;

/// File name (without extension) looked up when no `--config` is given
pub const DEFAULT_CONFIG_NAME: &str = "mapycz";

/// Prefix of environment variable overrides
pub const ENV_PREFIX: &str = "MAPYCZ";

/// Load and validate the provider configuration
pub fn load(path: Option<&Path>) -> Result<MapyCzConfig, ConfigError> {
    load_from(path, None)
}

/// Load configuration, reading environment overrides from `env` instead of
/// the process environment when given
fn load_from(
    path: Option<&Path>,
    env: Option<Map<String, String>>,
) -> Result<MapyCzConfig, ConfigError> {
    // An explicit path must exist; the default file is optional
    let file = match path {
        Some(path) => File::from(path).required(true),
        None => File::with_name(DEFAULT_CONFIG_NAME).required(false),
    };

    let config: MapyCzConfig = Config::builder()
        .add_source(file)
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true)
                .source(env),
        )
        .build()?
        .try_deserialize()?;

    config.validate().map_err(ConfigError::Message)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use integration_mapycz::{GEOCODE_URL, REVERSE_URL};
    use tempfile::NamedTempFile;

    use super::*;

    fn toml_file(contents: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("tempfile");
        file.write_all(contents.as_bytes()).expect("write");
        file
    }

    fn env(pairs: &[(&str, &str)]) -> Option<Map<String, String>> {
        Some(
            pairs
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        )
    }

    #[test]
    fn defaults_without_file_or_env() {
        let config = load_from(None, env(&[])).expect("config");
        assert_eq!(config, MapyCzConfig::default());
        assert_eq!(config.geocode_url, GEOCODE_URL);
        assert_eq!(config.reverse_url, REVERSE_URL);
    }

    #[test]
    fn file_overrides_defaults() {
        let file = toml_file(
            r#"
timeout_secs = 30
user_agent = "my-app/1.0"
"#,
        );

        let config = load_from(Some(file.path()), env(&[])).expect("config");
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.user_agent, "my-app/1.0");
        assert_eq!(config.geocode_url, GEOCODE_URL);
    }

    #[test]
    fn env_overrides_file() {
        let file = toml_file("timeout_secs = 30\n");

        let config = load_from(
            Some(file.path()),
            env(&[
                ("MAPYCZ__TIMEOUT_SECS", "3"),
                ("MAPYCZ__GEOCODE_URL", "http://localhost:8080/geocode"),
            ]),
        )
        .expect("config");
        assert_eq!(config.timeout_secs, 3);
        assert_eq!(config.geocode_url, "http://localhost:8080/geocode");
        assert_eq!(config.reverse_url, REVERSE_URL);
    }

    #[test]
    fn unrelated_env_is_ignored() {
        let config = load_from(None, env(&[("MAPY_TIMEOUT_SECS", "3"), ("PATH", "/bin")]))
            .expect("config");
        assert_eq!(config.timeout_secs, MapyCzConfig::default().timeout_secs);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let result = load_from(Some(Path::new("/nonexistent/mapycz.toml")), env(&[]));
        assert!(result.is_err());
    }

    #[test]
    fn invalid_values_are_rejected() {
        let file = toml_file("timeout_secs = 0\n");
        let result = load_from(Some(file.path()), env(&[]));
        assert!(matches!(result, Err(ConfigError::Message(_))));

        let file = toml_file("reverse_url = \"not a url\"\n");
        assert!(load_from(Some(file.path()), env(&[])).is_err());
    }
}
