//! Timestamp parsing
//!
//! The API reports times as `YYYY-MM-DD HH:MM:SS.ffffff` in UTC. Some
//! endpoints wrap the same string in a PHP-style object
//! (`{"date": "...", "timezone_type": 3, "timezone": "UTC"}`); both shapes
//! are accepted wherever a timestamp is expected.
//!
//! Use with `#[serde(with = "crate::types::timestamp")]` or, for optional
//! fields, `#[serde(default, with = "crate::types::timestamp::option")]`.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serializer};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";
const DATE_FORMAT: &str = "%Y-%m-%d";
const ISO_UTC_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f+00:00";

/// Parse an API timestamp (`2024-05-01 12:30:45.123456`) as UTC.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    NaiveDateTime::parse_from_str(value.trim(), TIMESTAMP_FORMAT).map(|dt| dt.and_utc())
}

/// Parse a bare date (`2024-05-01`) as midnight UTC.
pub fn parse_date(value: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map(|date| date.and_time(chrono::NaiveTime::MIN).and_utc())
}

/// Parse an ISO 8601 timestamp with an explicit `+00:00` offset.
pub fn parse_iso_utc_timestamp(value: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    NaiveDateTime::parse_from_str(value.trim(), ISO_UTC_FORMAT).map(|dt| dt.and_utc())
}

/// Render a UTC timestamp as ISO 8601 with microseconds and a `Z` suffix.
pub fn to_iso_format(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Micros, true)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Raw {
    Text(String),
    Wrapped { date: String },
}

impl Raw {
    fn parse<E: serde::de::Error>(self) -> Result<DateTime<Utc>, E> {
        let text = match self {
            Raw::Text(text) | Raw::Wrapped { date: text } => text,
        };
        parse_timestamp(&text)
            .map_err(|e| E::custom(format!("invalid timestamp '{}': {}", text, e)))
    }
}

/// Serialize in the API's own format.
pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&value.format("%Y-%m-%d %H:%M:%S%.6f"))
}

/// Deserialize from a timestamp string or a `{"date": ...}` object.
pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
    Raw::deserialize(deserializer)?.parse()
}

/// Same as the parent module, for `Option<DateTime<Utc>>` fields.
pub mod option {
    use super::Raw;
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serialize `Some` in the API's format and `None` as null.
    pub fn serialize<S: Serializer>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(value) => super::serialize(value, serializer),
            None => serializer.serialize_none(),
        }
    }

    /// Deserialize null, an empty string or a timestamp.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        match Option::<Raw>::deserialize(deserializer)? {
            None => Ok(None),
            Some(Raw::Text(text)) if text.trim().is_empty() => Ok(None),
            Some(raw) => raw.parse().map(Some),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone, Timelike};
    use serde::Serialize;

    #[derive(Debug, Deserialize, Serialize)]
    struct Sample {
        #[serde(with = "crate::types::timestamp")]
        at: DateTime<Utc>,
        #[serde(default, with = "crate::types::timestamp::option")]
        seen: Option<DateTime<Utc>>,
    }

    #[test]
    fn test_parse_timestamp() {
        let ts = parse_timestamp("2024-05-01 12:30:45.123456").unwrap();
        assert_eq!(ts.year(), 2024);
        assert_eq!(ts.hour(), 12);
        assert_eq!(ts.nanosecond(), 123_456_000);

        let whole = parse_timestamp("2024-05-01 12:30:45").unwrap();
        assert_eq!(whole.second(), 45);

        assert!(parse_timestamp("yesterday").is_err());
    }

    #[test]
    fn test_parse_date_and_iso() {
        assert_eq!(
            parse_date("2023-12-31").unwrap(),
            Utc.with_ymd_and_hms(2023, 12, 31, 0, 0, 0).unwrap()
        );
        let iso = parse_iso_utc_timestamp("2020-01-02T03:04:05.000000+00:00").unwrap();
        assert_eq!(iso, Utc.with_ymd_and_hms(2020, 1, 2, 3, 4, 5).unwrap());
        assert_eq!(to_iso_format(&iso), "2020-01-02T03:04:05.000000Z");
    }

    #[test]
    fn test_deserialize_both_shapes() {
        let plain: Sample =
            serde_json::from_str(r#"{"at": "2024-05-01 12:30:45.000000"}"#).unwrap();
        assert!(plain.seen.is_none());

        let wrapped: Sample = serde_json::from_str(
            r#"{"at": {"date": "2024-05-01 12:30:45.000000", "timezone_type": 3, "timezone": "UTC"},
                "seen": "2024-04-01 00:00:00.5"}"#,
        )
        .unwrap();
        assert_eq!(wrapped.at, plain.at);
        assert_eq!(wrapped.seen.unwrap().nanosecond(), 500_000_000);
    }

    #[test]
    fn test_empty_optional_is_none() {
        let sample: Sample =
            serde_json::from_str(r#"{"at": "2024-05-01 12:30:45", "seen": ""}"#).unwrap();
        assert!(sample.seen.is_none());
    }

    #[test]
    fn test_serialize_round_trips() {
        let sample: Sample =
            serde_json::from_str(r#"{"at": "2024-05-01 12:30:45.250000", "seen": null}"#).unwrap();
        let json = serde_json::to_value(&sample).unwrap();
        assert_eq!(json["at"], "2024-05-01 12:30:45.250000");
        assert!(json["seen"].is_null());
    }
}
