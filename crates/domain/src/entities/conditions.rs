//! Normalized current conditions
//!
//! The schema every provider maps its payload into. Each field is optional:
//! a field the provider did not report is `None` and is omitted from the
//! serialized form, so downstream aggregation never averages in a value that
//! was never observed. Zero is a real reading and is kept.

use serde::{Deserialize, Serialize};

use crate::value_objects::TemperatureUnits;

/// Wind observation
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Wind {
    /// Wind speed in the configured unit system
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
    /// Direction the wind blows from, in degrees
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub degree: Option<f64>,
}

impl Wind {
    /// Whether neither speed nor direction is known
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.speed.is_none() && self.degree.is_none()
    }
}

/// Current conditions in the shared cross-provider schema
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizedConditions {
    /// Air temperature
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    /// Relative humidity in percent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub humidity: Option<f64>,
    /// Atmospheric pressure in hPa
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pressure: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wind: Option<Wind>,
    /// Human-readable description of the weather
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Shared icon identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Visibility in metres
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<f64>,
    /// Precipitation descriptor, e.g. `rain` or `snow`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precipitation: Option<String>,
    /// Precipitation amount
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precipitation_value: Option<f64>,
    /// Temperature unit symbol (`C`, `F` or `K`) the readings are expressed in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,
    /// Undecoded provider payload, attached only in debug mode
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw: Option<serde_json::Value>,
}

impl NormalizedConditions {
    /// Whether no provider field is present
    ///
    /// `units` and `raw` do not count: they describe the result, they are
    /// not observations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.temperature.is_none()
            && self.humidity.is_none()
            && self.pressure.is_none()
            && self.wind.is_none_or(|w| w.is_empty())
            && self.summary.is_none()
            && self.icon.is_none()
            && self.visibility.is_none()
            && self.precipitation.is_none()
            && self.precipitation_value.is_none()
    }

    /// Drop fields that carry no information
    ///
    /// Blank strings and wind blocks without speed or direction are removed.
    /// Numeric values, including zero, are left untouched. `units` and `raw`
    /// are exempt.
    #[must_use]
    pub fn compact(mut self) -> Self {
        self.summary = self.summary.filter(|s| !s.trim().is_empty());
        self.icon = self.icon.filter(|s| !s.is_empty());
        self.precipitation = self.precipitation.filter(|s| !s.trim().is_empty());
        self.wind = self.wind.filter(|w| !w.is_empty());
        self
    }

    /// Record the unit system the readings are expressed in
    #[must_use]
    pub fn with_units(mut self, units: TemperatureUnits) -> Self {
        self.units = Some(units.symbol().to_string());
        self
    }

    /// Attach the raw provider payload
    #[must_use]
    pub fn with_raw(mut self, raw: serde_json::Value) -> Self {
        self.raw = Some(raw);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty_and_serializes_to_empty_object() {
        let conditions = NormalizedConditions::default();
        assert!(conditions.is_empty());
        assert_eq!(serde_json::to_string(&conditions).expect("serialize"), "{}");
    }

    #[test]
    fn absent_fields_are_omitted() {
        let conditions = NormalizedConditions {
            temperature: Some(21.5),
            ..Default::default()
        };
        let json = serde_json::to_value(&conditions).expect("serialize");
        assert_eq!(json, serde_json::json!({ "temperature": 21.5 }));
    }

    #[test]
    fn compact_keeps_zero_values() {
        let conditions = NormalizedConditions {
            humidity: Some(0.0),
            wind: Some(Wind {
                speed: Some(0.0),
                degree: None,
            }),
            ..Default::default()
        }
        .compact();

        assert_eq!(conditions.humidity, Some(0.0));
        assert_eq!(conditions.wind.and_then(|w| w.speed), Some(0.0));
        assert!(!conditions.is_empty());
    }

    #[test]
    fn compact_drops_blank_strings_and_empty_wind() {
        let conditions = NormalizedConditions {
            summary: Some("  ".to_string()),
            icon: Some(String::new()),
            precipitation: Some(String::new()),
            wind: Some(Wind::default()),
            ..Default::default()
        }
        .compact();

        assert_eq!(conditions, NormalizedConditions::default());
    }

    #[test]
    fn raw_does_not_count_towards_emptiness() {
        let conditions =
            NormalizedConditions::default().with_raw(serde_json::json!({ "cod": 401 }));
        assert!(conditions.is_empty());
        assert!(conditions.compact().raw.is_some());
    }

    #[test]
    fn units_survive_compaction_and_do_not_count_as_data() {
        let conditions = NormalizedConditions::default()
            .with_units(TemperatureUnits::Imperial)
            .compact();

        assert!(conditions.is_empty());
        assert_eq!(
            serde_json::to_value(&conditions).expect("serialize"),
            serde_json::json!({ "units": "F" })
        );
    }

    #[test]
    fn wind_serializes_nested() {
        let conditions = NormalizedConditions {
            wind: Some(Wind {
                speed: Some(4.1),
                degree: Some(250.0),
            }),
            ..Default::default()
        };
        let json = serde_json::to_value(&conditions).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({ "wind": { "speed": 4.1, "degree": 250.0 } })
        );
    }

    #[test]
    fn json_round_trip_preserves_value() {
        let conditions = NormalizedConditions {
            temperature: Some(3.2),
            summary: Some("light rain".to_string()),
            icon: Some("wi-rain".to_string()),
            raw: Some(serde_json::json!({ "main": { "temp": 3.2 } })),
            ..Default::default()
        };
        let bytes = serde_json::to_vec(&conditions).expect("serialize");
        let back: NormalizedConditions = serde_json::from_slice(&bytes).expect("deserialize");
        assert_eq!(back, conditions);
    }
}
