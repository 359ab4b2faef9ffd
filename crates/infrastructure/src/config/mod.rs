//! Application configuration
//!
//! Split into focused sections:
//! - `server`: HTTP server settings
//! - `mock_transit`: simulated latency per provider operation
//! - `telemetry`: log filter and output format
//!
//! Sources are layered: serde defaults, then `config.toml` in the working
//! directory (or the file named by `TRANSIT_MOCK_CONFIG`), then environment
//! variables such as `TRANSIT_MOCK_SERVER__PORT=8080`.

mod server;

use std::path::{Path, PathBuf};

use integration_transit::MockTransitConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use server::ServerConfig;

use crate::telemetry::TelemetryConfig;

/// Prefix of configuration environment variables
pub const ENV_PREFIX: &str = "TRANSIT_MOCK";

/// Environment variable naming an explicit configuration file
pub const CONFIG_PATH_ENV: &str = "TRANSIT_MOCK_CONFIG";

/// Shared default for boolean `true` fields across config structs
pub(crate) const fn default_true() -> bool {
    true
}

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Mock provider latency configuration
    #[serde(default)]
    pub mock_transit: MockTransitConfig,

    /// Logging configuration
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from the default file location and environment
    pub fn load() -> Result<Self, config::ConfigError> {
        let file = std::env::var(CONFIG_PATH_ENV).ok().map(PathBuf::from);
        Self::load_with(file.as_deref(), env_source())
    }

    /// Load configuration from an explicit file, then environment overrides
    pub fn load_from(path: &Path) -> Result<Self, config::ConfigError> {
        Self::load_with(Some(path), env_source())
    }

    fn load_with(
        file: Option<&Path>,
        env: config::Environment,
    ) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder();
        let builder = match file {
            Some(path) => {
                debug!(path = %path.display(), "Loading configuration file");
                builder.add_source(config::File::from(path).required(true))
            },
            None => builder.add_source(config::File::with_name("config").required(false)),
        };

        builder.add_source(env).build()?.try_deserialize()
    }

    /// Configuration suitable for tests: no simulated latency
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            mock_transit: MockTransitConfig::for_testing(),
            ..Default::default()
        }
    }
}

/// Environment source, e.g. `TRANSIT_MOCK_MOCK_TRANSIT__ROUTE_DELAY_MS=0`
fn env_source() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::telemetry::LogFormat;

    fn env_from(vars: &[(&str, &str)]) -> config::Environment {
        let map: config::Map<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        env_source().source(Some(map))
    }

    fn write_toml(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_without_sources() {
        let config = AppConfig::load_with(None, env_from(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.mock_transit.route_delay_ms, 300);
        assert_eq!(config.mock_transit.geo_features_delay_ms, 500);
    }

    #[test]
    fn file_overrides_defaults() {
        let file = write_toml(
            r#"
            [server]
            port = 9100

            [mock_transit]
            route_delay_ms = 0
            geo_features_delay_ms = 50

            [telemetry]
            log_format = "json"
            "#,
        );

        let config = AppConfig::load_with(Some(file.path()), env_from(&[])).unwrap();
        assert_eq!(config.server.port, 9100);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.mock_transit.route_delay_ms, 0);
        assert_eq!(config.mock_transit.nearby_delay_ms, 300);
        assert_eq!(config.mock_transit.geo_features_delay_ms, 50);
        assert_eq!(config.telemetry.log_format, LogFormat::Json);
    }

    #[test]
    fn environment_overrides_file() {
        let file = write_toml("[server]\nport = 9100\n");
        let env = env_from(&[
            ("TRANSIT_MOCK_SERVER__PORT", "9200"),
            ("TRANSIT_MOCK_MOCK_TRANSIT__NEARBY_DELAY_MS", "5"),
        ]);

        let config = AppConfig::load_with(Some(file.path()), env).unwrap();
        assert_eq!(config.server.port, 9200);
        assert_eq!(config.mock_transit.nearby_delay_ms, 5);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let result = AppConfig::load_with(
            Some(Path::new("/nonexistent/transit-mock.toml")),
            env_from(&[]),
        );
        assert!(result.is_err());
    }

    #[test]
    fn testing_config_is_instant() {
        assert!(AppConfig::for_testing().mock_transit.is_instant());
    }
}
