//! Unit system value object

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

/// Unit system requested from providers
///
/// The lowercase names match the `units` query parameter understood by
/// OpenWeatherMap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnits {
    /// Celsius, metres per second
    #[default]
    Metric,
    /// Fahrenheit, miles per hour
    Imperial,
    /// Kelvin, metres per second
    Standard,
}

impl TemperatureUnits {
    /// Name as sent to the provider
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Metric => "metric",
            Self::Imperial => "imperial",
            Self::Standard => "standard",
        }
    }

    /// Temperature symbol for display
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Metric => "C",
            Self::Imperial => "F",
            Self::Standard => "K",
        }
    }

    /// Convert a Celsius reading to Fahrenheit
    #[must_use]
    pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
        celsius.mul_add(9.0 / 5.0, 32.0)
    }
}

impl fmt::Display for TemperatureUnits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemperatureUnits {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "metric" | "celsius" | "c" => Ok(Self::Metric),
            "imperial" | "fahrenheit" | "f" => Ok(Self::Imperial),
            "standard" | "kelvin" | "k" => Ok(Self::Standard),
            _ => Err(DomainError::ValidationError(format!(
                "Invalid units: {s}. Use 'metric', 'imperial' or 'standard'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_names() {
        assert_eq!(TemperatureUnits::Metric.as_str(), "metric");
        assert_eq!(TemperatureUnits::Imperial.as_str(), "imperial");
        assert_eq!(TemperatureUnits::Standard.as_str(), "standard");
    }

    #[test]
    fn default_is_metric() {
        assert_eq!(TemperatureUnits::default(), TemperatureUnits::Metric);
    }

    #[test]
    fn freezing_point_converts_to_32() {
        assert!((TemperatureUnits::celsius_to_fahrenheit(0.0) - 32.0).abs() < f64::EPSILON);
        assert!((TemperatureUnits::celsius_to_fahrenheit(100.0) - 212.0).abs() < 1e-9);
        assert!((TemperatureUnits::celsius_to_fahrenheit(-40.0) + 40.0).abs() < 1e-9);
    }

    #[test]
    fn parses_aliases() {
        assert_eq!(
            "Imperial".parse::<TemperatureUnits>().expect("valid"),
            TemperatureUnits::Imperial
        );
        assert_eq!(
            "k".parse::<TemperatureUnits>().expect("valid"),
            TemperatureUnits::Standard
        );
        assert!("rankine".parse::<TemperatureUnits>().is_err());
    }

    #[test]
    fn serde_lowercase() {
        let json = serde_json::to_string(&TemperatureUnits::Imperial).expect("serialize");
        assert_eq!(json, r#""imperial""#);
    }
}
