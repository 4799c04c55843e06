//! OpenWeatherMap condition codes to shared icon identifiers
//!
//! Codes are documented at <https://openweathermap.org/weather-conditions>.
//! Icons use the Weather Icons (`wi-*`) vocabulary shared by all providers.
//! The 9xx codes come from the retired extreme/additional groups and are
//! kept so older stations still resolve.

/// Map an OpenWeatherMap condition code to an icon identifier
///
/// Unknown codes map to the empty string, never an error.
#[must_use]
pub const fn map_condition_code(code: i64) -> &'static str {
    match code {
        200 | 201 | 202 | 230 | 231 | 232 => "wi-thunderstorm",
        210 | 211 | 212 | 221 => "wi-lightning",
        300 | 301 | 321 | 500 => "wi-sprinkle",
        302 | 311 | 312 | 314 | 501 | 502 | 503 | 504 => "wi-rain",
        310 | 511 | 611 | 612 | 615 | 616 | 620 => "wi-rain-mix",
        313 | 520 | 521 | 522 | 701 => "wi-showers",
        531 | 901 => "wi-storm-showers",
        600 | 601 | 621 | 622 => "wi-snow",
        602 => "wi-sleet",
        711 => "wi-smoke",
        721 => "wi-day-haze",
        731 | 761 => "wi-dust",
        741 => "wi-fog",
        771 | 801 | 802 | 803 => "wi-cloudy-gusts",
        781 | 900 => "wi-tornado",
        800 => "wi-day-sunny",
        804 => "wi-cloudy",
        902 | 962 => "wi-hurricane",
        903 => "wi-snowflake-cold",
        904 => "wi-hot",
        905 => "wi-windy",
        906 => "wi-day-hail",
        957 => "wi-strong-wind",
        762 => "wi-volcano",
        751 => "wi-sandstorm",
        _ => "",
    }
}
