//! Payload normalization
//!
//! Maps OpenWeatherMap payloads into [`NormalizedConditions`]. Every rule is
//! guarded by presence in the source: a field the provider did not send stays
//! `None`. Malformed payloads degrade to fewer fields rather than failing.

use domain::{NormalizedConditions, TemperatureUnits, Wind};
use serde_json::Value;
use tracing::debug;

use crate::icons::map_condition_code;
use crate::payload::{at, first_or_self, integer_at, number_at, string_at};
use crate::request::Target;

/// Precipitation mode meaning "none is falling"
const NO_PRECIPITATION: &str = "no";

/// Normalize a `/data/2.5/weather` payload
pub fn normalize_current(payload: &Value) -> NormalizedConditions {
    let mut conditions = NormalizedConditions {
        temperature: number_at(payload, &["main", "temp"]),
        humidity: number_at(payload, &["main", "humidity"]),
        pressure: number_at(payload, &["main", "pressure"]),
        wind: wind(payload),
        visibility: number_at(payload, &["visibility"]),
        ..Default::default()
    };

    if let Some(weather) = at(payload, &["weather"]) {
        let weather = first_or_self(weather);
        conditions.summary = string_at(weather, &["description"]);
        conditions.icon = integer_at(weather, &["id"])
            .map(map_condition_code)
            .map(str::to_string);
    }

    if at(payload, &["precipitation"]).is_some() {
        conditions.precipitation = string_at(payload, &["precipitation", "mode"])
            .filter(|mode| mode != NO_PRECIPITATION);
        conditions.precipitation_value = number_at(payload, &["precipitation", "value"]);
    }

    conditions.compact()
}

/// Normalize a `/data/3.0/measurements` payload
///
/// The endpoint only reports Celsius, so temperatures are converted here
/// when imperial units were requested.
pub fn normalize_measurement(payload: &Value, units: TemperatureUnits) -> NormalizedConditions {
    let payload = first_or_self(payload);

    let temperature = number_at(payload, &["temp", "average"]).map(|celsius| match units {
        TemperatureUnits::Imperial => TemperatureUnits::celsius_to_fahrenheit(celsius),
        TemperatureUnits::Metric | TemperatureUnits::Standard => celsius,
    });

    NormalizedConditions {
        temperature,
        humidity: number_at(payload, &["humidity", "average"]),
        pressure: number_at(payload, &["pressure", "average"]),
        wind: wind(payload),
        ..Default::default()
    }
    .compact()
}

/// Decode a response body and normalize it for `target`
///
/// A body that is not JSON yields empty conditions. The result always records
/// the unit symbol for `units`. With `include_raw` the decoded payload (or the
/// body text, if it did not decode) is attached after compaction.
pub fn normalize_response(
    target: &Target,
    body: &[u8],
    units: TemperatureUnits,
    include_raw: bool,
) -> NormalizedConditions {
    let payload: Value = match serde_json::from_slice(body) {
        Ok(payload) => payload,
        Err(e) => {
            debug!(error = %e, bytes = body.len(), "Response body is not valid JSON");
            let conditions = NormalizedConditions::default().with_units(units);
            return if include_raw {
                conditions.with_raw(Value::String(String::from_utf8_lossy(body).into_owned()))
            } else {
                conditions
            };
        },
    };

    let conditions = match target {
        Target::Coordinates(_) => normalize_current(&payload),
        Target::Station(_) => normalize_measurement(&payload, units),
    }
    .with_units(units);

    if include_raw {
        conditions.with_raw(payload)
    } else {
        conditions
    }
}

fn wind(payload: &Value) -> Option<Wind> {
    at(payload, &["wind"])?;
    Some(Wind {
        speed: number_at(payload, &["wind", "speed"]),
        degree: number_at(payload, &["wind", "deg"]),
    })
}
