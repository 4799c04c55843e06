//! Lenient accessors over decoded JSON payloads
//!
//! OpenWeatherMap is not consistent about shapes: `weather` may be an array
//! or a single object, the measurements endpoint may return a list, and
//! numbers occasionally arrive as strings. Every quirk is absorbed here so
//! the field mapping in `normalize` stays a flat list of rules.

use serde_json::Value;

/// First element if `value` is an array, otherwise the value itself
///
/// An empty array yields `Value::Null`.
pub(crate) fn first_or_self(value: &Value) -> &Value {
    match value {
        Value::Array(items) => items.first().unwrap_or(&Value::Null),
        other => other,
    }
}

/// Walk an object path, returning `None` on any missing or non-object step
pub(crate) fn at<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter()
        .try_fold(value, |current, key| current.as_object()?.get(*key))
        .filter(|v| !v.is_null())
}

/// Number at `path`; numeric strings are accepted
pub(crate) fn number_at(value: &Value, path: &[&str]) -> Option<f64> {
    match at(value, path)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    }
}

/// Integer at `path`; fractional numbers are truncated
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn integer_at(value: &Value, path: &[&str]) -> Option<i64> {
    match at(value, path)? {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

/// String at `path`
pub(crate) fn string_at(value: &Value, path: &[&str]) -> Option<String> {
    match at(value, path)? {
        Value::String(s) => Some(s.clone()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn first_or_self_unwraps_arrays() {
        let array = json!([{ "id": 1 }, { "id": 2 }]);
        assert_eq!(first_or_self(&array), &json!({ "id": 1 }));

        let object = json!({ "id": 3 });
        assert_eq!(first_or_self(&object), &object);

        assert_eq!(first_or_self(&json!([])), &Value::Null);
    }

    #[test]
    fn at_follows_paths() {
        let value = json!({ "main": { "temp": 1.5 } });
        assert_eq!(at(&value, &["main", "temp"]), Some(&json!(1.5)));
        assert_eq!(at(&value, &["main", "missing"]), None);
        assert_eq!(at(&value, &["main", "temp", "deeper"]), None);
        assert_eq!(at(&json!({ "main": null }), &["main"]), None);
    }

    #[test]
    fn number_at_accepts_numeric_strings() {
        let value = json!({ "a": 1, "b": "2.5", "c": "n/a", "d": true });
        assert_eq!(number_at(&value, &["a"]), Some(1.0));
        assert_eq!(number_at(&value, &["b"]), Some(2.5));
        assert_eq!(number_at(&value, &["c"]), None);
        assert_eq!(number_at(&value, &["d"]), None);
    }

    #[test]
    fn integer_at_truncates() {
        let value = json!({ "a": 800, "b": 500.7, "c": "232" });
        assert_eq!(integer_at(&value, &["a"]), Some(800));
        assert_eq!(integer_at(&value, &["b"]), Some(500));
        assert_eq!(integer_at(&value, &["c"]), Some(232));
    }

    #[test]
    fn string_at_rejects_non_strings() {
        let value = json!({ "a": "rain", "b": 1 });
        assert_eq!(string_at(&value, &["a"]).as_deref(), Some("rain"));
        assert_eq!(string_at(&value, &["b"]), None);
    }
}
