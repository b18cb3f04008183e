//! Repairs shape mismatches between the wire format and the cached shape.
//!
//! Dates become canonical UTC timestamps, embedded JSON blobs that arrive as
//! strings are decoded, and integer flags are accepted as booleans. Nothing in
//! here fails: a malformed field is logged and replaced.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Naive layouts the tracker API emits, tried in order.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Entities that carry fields needing repair after decoding.
pub trait Normalize {
    fn normalize(self) -> Self;
}

impl<T: Normalize> Normalize for Vec<T> {
    fn normalize(self) -> Self {
        self.into_iter().map(Normalize::normalize).collect()
    }
}

/// Convert a date field into a canonical RFC 3339 UTC string.
///
/// Naive timestamps are read as UTC. A missing date stays missing; an
/// unreadable one is dropped with a warning.
pub fn normalize_date(raw: Option<String>) -> Option<String> {
    let raw = raw?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    match parse_timestamp(trimmed) {
        Some(ts) => Some(ts.to_rfc3339_opts(SecondsFormat::Millis, true)),
        None => {
            tracing::warn!("Unreadable date {:?}, dropping it", raw);
            None
        }
    }
}

fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(s) {
        return Some(ts.with_timezone(&Utc));
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Decode a raw-result payload that may arrive as a JSON-encoded string.
///
/// An unparsable string becomes an empty object.
pub fn decode_payload(raw: Option<Value>) -> Option<Value> {
    match raw? {
        Value::String(encoded) => match serde_json::from_str::<Value>(&encoded) {
            Ok(decoded) => Some(decoded),
            Err(e) => {
                tracing::warn!("Malformed full_data payload, substituting empty object: {}", e);
                Some(Value::Object(Map::new()))
            }
        },
        other => Some(other),
    }
}

/// Accept `true`/`false`, `0`/`1` and `"0"`/`"1"` for boolean flags.
///
/// Missing or null flags read as `true`, the server's column default.
pub fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => true,
        Some(Value::Bool(b)) => b,
        Some(Value::Number(n)) => n.as_i64().map(|n| n != 0).unwrap_or(true),
        Some(Value::String(s)) => !matches!(s.as_str(), "0" | "false"),
        Some(_) => true,
    })
}

/// Default for flags that are absent from the payload.
pub fn flag_default() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sqlite_timestamp_is_canonicalized() {
        let out = normalize_date(Some("2024-08-01 12:34:56".to_string()));
        assert_eq!(out.as_deref(), Some("2024-08-01T12:34:56.000Z"));
    }

    #[test]
    fn test_iso_with_fraction_and_offset() {
        assert_eq!(
            normalize_date(Some("2024-08-01T12:34:56.123456".to_string())).as_deref(),
            Some("2024-08-01T12:34:56.123Z")
        );
        assert_eq!(
            normalize_date(Some("2024-08-01T14:00:00+02:00".to_string())).as_deref(),
            Some("2024-08-01T12:00:00.000Z")
        );
    }

    #[test]
    fn test_bare_date() {
        assert_eq!(
            normalize_date(Some("2024-08-01".to_string())).as_deref(),
            Some("2024-08-01T00:00:00.000Z")
        );
    }

    #[test]
    fn test_missing_date_stays_missing() {
        assert_eq!(normalize_date(None), None);
        assert_eq!(normalize_date(Some("  ".to_string())), None);
    }

    #[test]
    fn test_unreadable_date_is_dropped() {
        assert_eq!(normalize_date(Some("last tuesday".to_string())), None);
    }

    #[test]
    fn test_string_payload_is_decoded() {
        let raw = json!("{\"organic_results\": [{\"position\": 3}]}");
        let decoded = decode_payload(Some(raw)).unwrap();
        assert_eq!(decoded["organic_results"][0]["position"], 3);
    }

    #[test]
    fn test_malformed_payload_becomes_empty_object() {
        let decoded = decode_payload(Some(json!("{not json"))).unwrap();
        assert_eq!(decoded, json!({}));
    }

    #[test]
    fn test_structured_payload_passes_through() {
        let raw = json!({"organic_results": []});
        assert_eq!(decode_payload(Some(raw.clone())), Some(raw));
        assert_eq!(decode_payload(None), None);
    }

    #[derive(Deserialize)]
    struct Flagged {
        #[serde(default = "flag_default", deserialize_with = "deserialize_flag")]
        active: bool,
    }

    #[test]
    fn test_flag_accepts_integers_and_booleans() {
        let parse = |v: Value| serde_json::from_value::<Flagged>(v).unwrap().active;

        assert!(parse(json!({"active": 1})));
        assert!(!parse(json!({"active": 0})));
        assert!(!parse(json!({"active": false})));
        assert!(parse(json!({"active": null})));
        assert!(parse(json!({})));
    }
}
