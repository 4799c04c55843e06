//! OpenWeatherMap provider configuration

use std::fmt;
use std::time::Duration;

use domain::{GeoLocation, StationId, TemperatureUnits};
use serde::{Deserialize, Serialize};

use crate::request::Target;

/// Settings key for the API key fallback
pub const API_KEY_SETTING: &str = "openweathermap/api_key";

/// Settings key for the station id fallback
pub const STATION_ID_SETTING: &str = "openweathermap/station_id";

/// Provider configuration
///
/// Supplied once when the provider is constructed and never mutated after.
#[derive(Clone, Serialize, Deserialize)]
pub struct OpenWeatherMapConfig {
    /// API base URL (default: <https://api.openweathermap.org>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key sent as `appid`
    #[serde(default)]
    pub api_key: Option<String>,

    /// Coordinates to query; take precedence over `station_id`
    #[serde(default)]
    pub location: Option<GeoLocation>,

    /// Fixed station to query when no coordinates are set
    #[serde(default)]
    pub station_id: Option<StationId>,

    /// Unit system for returned values
    #[serde(default)]
    pub units: TemperatureUnits,

    /// Cache key prefix; caching is disabled when unset or blank
    #[serde(default)]
    pub cache_key: Option<String>,

    /// Cache TTL in milliseconds (default: 10 minutes)
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl_ms: u64,

    /// Attach the decoded provider payload to results
    #[serde(default)]
    pub include_raw: bool,

    /// HTTP timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.openweathermap.org".to_string()
}

const fn default_cache_ttl() -> u64 {
    10 * 60 * 1000
}

const fn default_timeout() -> u64 {
    30
}

impl Default for OpenWeatherMapConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            location: None,
            station_id: None,
            units: TemperatureUnits::default(),
            cache_key: None,
            cache_ttl_ms: default_cache_ttl(),
            include_raw: false,
            timeout_secs: default_timeout(),
        }
    }
}

impl fmt::Debug for OpenWeatherMapConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenWeatherMapConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("location", &self.location)
            .field("station_id", &self.station_id)
            .field("units", &self.units)
            .field("cache_key", &self.cache_key)
            .field("cache_ttl_ms", &self.cache_ttl_ms)
            .field("include_raw", &self.include_raw)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl OpenWeatherMapConfig {
    /// Set the API key
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the coordinates to query
    #[must_use]
    pub const fn with_location(mut self, location: GeoLocation) -> Self {
        self.location = Some(location);
        self
    }

    /// Set the station to query
    #[must_use]
    pub fn with_station(mut self, station_id: StationId) -> Self {
        self.station_id = Some(station_id);
        self
    }

    /// Set the unit system
    #[must_use]
    pub const fn with_units(mut self, units: TemperatureUnits) -> Self {
        self.units = units;
        self
    }

    /// Enable caching under the given key prefix
    #[must_use]
    pub fn with_cache(mut self, cache_key: impl Into<String>, ttl: Duration) -> Self {
        self.cache_key = Some(cache_key.into());
        self.cache_ttl_ms = u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Attach raw payloads to results
    #[must_use]
    pub const fn with_raw(mut self, include_raw: bool) -> Self {
        self.include_raw = include_raw;
        self
    }

    /// API key, if one is configured and non-blank
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|k| !k.trim().is_empty())
    }

    /// Cache key prefix, if caching is enabled
    pub fn cache_key(&self) -> Option<&str> {
        self.cache_key.as_deref().filter(|k| !k.trim().is_empty())
    }

    /// Cache TTL
    pub const fn cache_ttl(&self) -> Duration {
        Duration::from_millis(self.cache_ttl_ms)
    }

    /// What to query: coordinates first, then station, else nothing
    pub fn target(&self) -> Option<Target> {
        self.location.map(Target::Coordinates).or_else(|| {
            self.station_id
                .as_ref()
                .map(|id| Target::Station(id.clone()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn berlin() -> GeoLocation {
        GeoLocation::new(52.52, 13.405).unwrap()
    }

    fn station() -> StationId {
        StationId::new("5ed21a12cca8ce0001f1aef1").unwrap()
    }

    #[test]
    fn test_config_defaults() {
        let config = OpenWeatherMapConfig::default();
        assert_eq!(config.base_url, "https://api.openweathermap.org");
        assert_eq!(config.cache_ttl(), Duration::from_secs(600));
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.units, TemperatureUnits::Metric);
        assert!(!config.include_raw);
        assert!(config.target().is_none());
    }

    #[test]
    fn test_coordinates_take_precedence() {
        let config = OpenWeatherMapConfig::default()
            .with_station(station())
            .with_location(berlin());
        assert_eq!(config.target(), Some(Target::Coordinates(berlin())));
    }

    #[test]
    fn test_station_target() {
        let config = OpenWeatherMapConfig::default().with_station(station());
        assert_eq!(config.target(), Some(Target::Station(station())));
    }

    #[test]
    fn test_blank_values_count_as_unset() {
        let config = OpenWeatherMapConfig {
            api_key: Some("  ".to_string()),
            cache_key: Some(String::new()),
            ..Default::default()
        };
        assert!(config.api_key().is_none());
        assert!(config.cache_key().is_none());
    }

    #[test]
    fn test_with_cache() {
        let config =
            OpenWeatherMapConfig::default().with_cache("owm", Duration::from_secs(1800));
        assert_eq!(config.cache_key(), Some("owm"));
        assert_eq!(config.cache_ttl(), Duration::from_secs(1800));
    }

    #[test]
    fn test_with_cache_keeps_sub_second_ttl() {
        let config =
            OpenWeatherMapConfig::default().with_cache("owm", Duration::from_millis(250));
        assert_eq!(config.cache_ttl(), Duration::from_millis(250));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = OpenWeatherMapConfig::default().with_api_key("super-secret");
        let debug = format!("{config:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("REDACTED"));
    }

    #[test]
    fn test_config_deserialization() {
        let json = r#"{
            "api_key": "abc",
            "location": { "latitude": 48.85, "longitude": 2.35 },
            "units": "imperial",
            "cache_key": "owm"
        }"#;
        let config: OpenWeatherMapConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.api_key(), Some("abc"));
        assert_eq!(config.units, TemperatureUnits::Imperial);
        assert_eq!(config.cache_ttl_ms, 600_000);
        assert!(matches!(config.target(), Some(Target::Coordinates(_))));
    }
}
