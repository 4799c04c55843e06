//! OpenWeatherMap integration
//!
//! Provider knowledge for the OpenWeatherMap API (<https://openweathermap.org/api>):
//! how to build current-weather and station-measurement requests, how to map
//! their JSON payloads into [`domain::NormalizedConditions`], and how to turn
//! condition codes into shared icon identifiers. This crate performs no I/O.

pub mod config;
pub mod icons;
pub mod normalize;
mod payload;
pub mod request;

pub use config::{API_KEY_SETTING, OpenWeatherMapConfig, STATION_ID_SETTING};
pub use icons::map_condition_code;
pub use normalize::{normalize_current, normalize_measurement, normalize_response};
pub use request::{ApiRequest, Target};
