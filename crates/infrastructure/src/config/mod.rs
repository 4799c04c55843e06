//! Application configuration
//!
//! Layered with the `config` crate: built-in defaults, then an optional
//! `config.toml`, then environment variables prefixed with `OWM_` using
//! `__` between nested keys (e.g. `OWM_OPENWEATHERMAP__UNITS=imperial`).
//!
//! Caching is not configured here. A cache only pays off in a long-lived
//! process, so embedders attach one to the adapter themselves.

use std::fmt;
use std::time::Duration;

use application::error::ApplicationError;
use domain::{GeoLocation, StationId, TemperatureUnits};
use integration_openweathermap::OpenWeatherMapConfig;
use serde::{Deserialize, Serialize};

use crate::telemetry::TelemetryConfig;

/// Environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "OWM";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// OpenWeatherMap provider configuration
    #[serde(default)]
    pub openweathermap: OpenWeatherMapAppConfig,

    /// Logging configuration
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from `config.toml` (if present) and environment
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from the given file (if present) and environment
    ///
    /// `path` may omit the extension; the format is detected from it.
    pub fn load_from(path: &str) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Start with defaults
            .set_default("openweathermap.base_url", default_base_url())?
            .set_default("openweathermap.units", TemperatureUnits::default().as_str())?
            // Load from file if exists
            .add_source(config::File::with_name(path).required(false))
            // Override with environment variables (e.g., OWM_OPENWEATHERMAP__API_KEY)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }
}

/// OpenWeatherMap settings as they appear in configuration files
#[derive(Clone, Serialize, Deserialize)]
pub struct OpenWeatherMapAppConfig {
    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key
    #[serde(default)]
    pub api_key: Option<String>,

    /// Latitude of the location to query
    #[serde(default)]
    pub latitude: Option<f64>,

    /// Longitude of the location to query
    #[serde(default)]
    pub longitude: Option<f64>,

    /// Station to query when no coordinates are set
    #[serde(default)]
    pub station_id: Option<String>,

    /// Unit system (metric, imperial, standard)
    #[serde(default)]
    pub units: TemperatureUnits,

    /// Attach the raw provider payload to results
    #[serde(default)]
    pub include_raw: bool,

    /// HTTP timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.openweathermap.org".to_string()
}

const fn default_timeout() -> u64 {
    30
}

impl Default for OpenWeatherMapAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            latitude: None,
            longitude: None,
            station_id: None,
            units: TemperatureUnits::default(),
            include_raw: false,
            timeout_secs: default_timeout(),
        }
    }
}

impl fmt::Debug for OpenWeatherMapAppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenWeatherMapAppConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("latitude", &self.latitude)
            .field("longitude", &self.longitude)
            .field("station_id", &self.station_id)
            .field("units", &self.units)
            .field("include_raw", &self.include_raw)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl OpenWeatherMapAppConfig {
    /// Validate and convert into the provider configuration
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` when only one coordinate is
    /// set or the coordinates are out of range. A blank station id counts as
    /// unset.
    pub fn to_provider_config(&self) -> Result<OpenWeatherMapConfig, ApplicationError> {
        let location = match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some(
                GeoLocation::new(lat, lon)
                    .map_err(|e| ApplicationError::Configuration(e.to_string()))?,
            ),
            (None, None) => None,
            _ => {
                return Err(ApplicationError::Configuration(
                    "latitude and longitude must be set together".into(),
                ));
            },
        };

        let station_id = self
            .station_id
            .as_deref()
            .filter(|id| !id.trim().is_empty())
            .map(StationId::new)
            .transpose()?;

        Ok(OpenWeatherMapConfig {
            base_url: self.base_url.clone(),
            api_key: self.api_key.clone(),
            location,
            station_id,
            units: self.units,
            include_raw: self.include_raw,
            timeout_secs: self.timeout_secs,
            ..OpenWeatherMapConfig::default()
        })
    }

    /// HTTP timeout
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
