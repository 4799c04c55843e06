//! Request construction for the two OpenWeatherMap endpoints

use chrono::{DateTime, Utc};
use domain::{GeoLocation, StationId, TemperatureUnits};

/// Path of the current weather endpoint (coordinate queries)
pub const CURRENT_WEATHER_PATH: &str = "/data/2.5/weather";

/// Path of the station measurements endpoint
pub const MEASUREMENTS_PATH: &str = "/data/3.0/measurements";

/// Lookback window for station measurements, in seconds
const MEASUREMENT_WINDOW_SECS: i64 = 3600;

/// What a conditions request is about
#[derive(Debug, Clone, PartialEq)]
pub enum Target {
    /// Arbitrary coordinates
    Coordinates(GeoLocation),
    /// A fixed observation station
    Station(StationId),
}

impl Target {
    /// String hashed into the cache key
    pub fn cache_subject(&self) -> String {
        match self {
            Self::Coordinates(location) => location.cache_subject(),
            Self::Station(id) => id.as_str().to_string(),
        }
    }

    /// Build the request for this target
    ///
    /// `now` anchors the one-hour measurement window for station queries.
    pub fn request(
        &self,
        base_url: &str,
        api_key: &str,
        units: TemperatureUnits,
        now: DateTime<Utc>,
    ) -> ApiRequest {
        let base_url = base_url.trim_end_matches('/');
        let common = vec![
            ("appid", api_key.to_string()),
            ("units", units.as_str().to_string()),
        ];

        match self {
            Self::Coordinates(location) => {
                let mut params = common;
                params.push(("lat", location.latitude().to_string()));
                params.push(("lon", location.longitude().to_string()));
                ApiRequest {
                    url: format!("{base_url}{CURRENT_WEATHER_PATH}"),
                    params,
                }
            },
            Self::Station(id) => {
                let to = now.timestamp();
                let from = to - MEASUREMENT_WINDOW_SECS;
                let mut params = common;
                params.push(("station_id", id.as_str().to_string()));
                params.push(("type", "h".to_string()));
                params.push(("from", from.to_string()));
                params.push(("to", to.to_string()));
                params.push(("limit", "1".to_string()));
                ApiRequest {
                    url: format!("{base_url}{MEASUREMENTS_PATH}"),
                    params,
                }
            },
        }
    }
}

/// A GET request against the OpenWeatherMap API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    /// Endpoint URL without query string
    pub url: String,
    /// Query parameters in the order they are sent
    pub params: Vec<(&'static str, String)>,
}

impl ApiRequest {
    /// Look up a query parameter
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }
}
