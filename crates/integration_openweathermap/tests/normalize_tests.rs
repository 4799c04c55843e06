//! Normalization tests against realistic OpenWeatherMap payloads

use domain::{GeoLocation, NormalizedConditions, StationId, TemperatureUnits, Wind};
use integration_openweathermap::{
    Target, map_condition_code, normalize_current, normalize_measurement, normalize_response,
};
use proptest::prelude::*;
use serde_json::{Value, json};

/// Sample `/data/2.5/weather` response
fn sample_current_response() -> Value {
    json!({
        "coord": { "lon": 13.405, "lat": 52.52 },
        "weather": [
            { "id": 803, "main": "Clouds", "description": "broken clouds", "icon": "04d" }
        ],
        "base": "stations",
        "main": {
            "temp": 5.5,
            "feels_like": 2.0,
            "temp_min": 4.1,
            "temp_max": 6.9,
            "pressure": 1013,
            "humidity": 75
        },
        "visibility": 10000,
        "wind": { "speed": 4.12, "deg": 250 },
        "clouds": { "all": 75 },
        "dt": 1_705_320_000,
        "sys": { "country": "DE", "sunrise": 1_705_302_900, "sunset": 1_705_332_600 },
        "timezone": 3600,
        "id": 2_950_159,
        "name": "Berlin",
        "cod": 200
    })
}

/// Sample `/data/3.0/measurements` response
fn sample_measurement_response() -> Value {
    json!([{
        "type": "h",
        "date": 1_705_316_400,
        "station_id": "5ed21a12cca8ce0001f1aef1",
        "temp": { "max": 8.0, "min": 6.5, "average": 7.25, "weight": 12 },
        "humidity": { "average": 81, "weight": 12 },
        "wind": { "deg": 200, "speed": 3.4 },
        "pressure": { "min": 1008, "max": 1010, "average": 1009, "weight": 12 },
        "precipitation": { "rain": 0.0 }
    }])
}

#[test]
fn test_full_current_payload() {
    let conditions = normalize_current(&sample_current_response());

    assert_eq!(
        conditions,
        NormalizedConditions {
            temperature: Some(5.5),
            humidity: Some(75.0),
            pressure: Some(1013.0),
            wind: Some(Wind {
                speed: Some(4.12),
                degree: Some(250.0),
            }),
            summary: Some("broken clouds".to_string()),
            icon: Some("wi-cloudy-gusts".to_string()),
            visibility: Some(10000.0),
            precipitation: None,
            precipitation_value: None,
            units: None,
            raw: None,
        }
    );
}

#[test]
fn test_main_block_yields_exactly_three_fields() {
    let conditions = normalize_current(&json!({
        "main": { "temp": -3.5, "humidity": 0, "pressure": 998.5 }
    }));
    let json = serde_json::to_value(&conditions).unwrap();

    assert_eq!(
        json,
        json!({ "temperature": -3.5, "humidity": 0.0, "pressure": 998.5 })
    );
}

#[test]
fn test_error_payload_normalizes_to_empty() {
    let conditions = normalize_current(&json!({
        "cod": 401,
        "message": "Invalid API key. Please see https://openweathermap.org/faq#error401 for more info."
    }));
    assert!(conditions.is_empty());
}

#[test]
fn test_wrong_shapes_degrade_gracefully() {
    let conditions = normalize_current(&json!({
        "main": "warm",
        "wind": [1, 2],
        "weather": 42,
        "visibility": "far",
        "precipitation": null
    }));
    assert_eq!(conditions, NormalizedConditions::default());
}

#[test]
fn test_full_measurement_payload() {
    let conditions = normalize_measurement(&sample_measurement_response(), TemperatureUnits::Metric);

    assert_eq!(conditions.temperature, Some(7.25));
    assert_eq!(conditions.humidity, Some(81.0));
    assert_eq!(conditions.pressure, Some(1009.0));
    assert_eq!(conditions.wind.and_then(|w| w.degree), Some(200.0));
    assert!(conditions.summary.is_none());
    assert!(conditions.icon.is_none());
}

#[test]
fn test_measurement_imperial_freezing_point() {
    let payload = json!([{ "temp": { "average": 0 } }]);
    let conditions = normalize_measurement(&payload, TemperatureUnits::Imperial);
    assert_eq!(conditions.temperature, Some(32.0));
}

#[test]
fn test_response_body_round_trip_through_bytes() {
    let target = Target::Station(StationId::new("5ed21a12cca8ce0001f1aef1").unwrap());
    let body = serde_json::to_vec(&sample_measurement_response()).unwrap();

    let conditions = normalize_response(&target, &body, TemperatureUnits::Imperial, false);
    let expected = TemperatureUnits::celsius_to_fahrenheit(7.25);
    assert!((conditions.temperature.unwrap() - expected).abs() < 1e-9);
}

#[test]
fn test_required_icon_examples() {
    assert_eq!(map_condition_code(800), "wi-day-sunny");
    assert_eq!(map_condition_code(232), "wi-thunderstorm");
    assert_eq!(map_condition_code(999_999), "");
}

#[test]
fn test_coordinate_target_ignores_measurement_fields() {
    let target = Target::Coordinates(GeoLocation::new(52.52, 13.405).unwrap());
    let body = serde_json::to_vec(&sample_measurement_response()).unwrap();
    let conditions = normalize_response(&target, &body, TemperatureUnits::Metric, false);
    assert!(conditions.is_empty());
}

// ============================================================================
// Array/object equivalence for `weather`
// ============================================================================

fn weather_entry() -> impl Strategy<Value = Value> {
    (
        prop_oneof![Just(200i64), Just(500), Just(800), Just(804), 0i64..1000],
        "[a-z ]{0,20}",
    )
        .prop_map(|(id, description)| json!({ "id": id, "description": description }))
}

proptest! {
    #[test]
    fn weather_array_equals_object(entry in weather_entry(), temp in -40.0f64..45.0) {
        let as_array = json!({ "main": { "temp": temp }, "weather": [entry.clone()] });
        let as_object = json!({ "main": { "temp": temp }, "weather": entry });

        prop_assert_eq!(normalize_current(&as_array), normalize_current(&as_object));
    }

    #[test]
    fn only_first_weather_entry_counts(first in weather_entry(), second in weather_entry()) {
        let both = json!({ "weather": [first.clone(), second] });
        let single = json!({ "weather": first });

        prop_assert_eq!(normalize_current(&both), normalize_current(&single));
    }

    #[test]
    fn icon_is_known_or_absent(code in any::<i64>()) {
        let conditions = normalize_current(&json!({ "weather": { "id": code } }));
        let expected = map_condition_code(code);
        if expected.is_empty() {
            prop_assert!(conditions.icon.is_none());
        } else {
            prop_assert_eq!(conditions.icon.as_deref(), Some(expected));
        }
    }
}
