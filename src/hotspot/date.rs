//! Serde adapter for server timestamps.
//!
//! The server writes offsets without a colon (`2024-03-01T10:15:00+0100`);
//! RFC 3339 input is accepted as well.

use chrono::{DateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serializer};

const FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

pub fn parse(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_str(value, FORMAT)
        .or_else(|_| DateTime::parse_from_rfc3339(value))
        .ok()
        .map(|date| date.with_timezone(&Utc))
}

pub fn serialize<S: Serializer>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&date.format(FORMAT).to_string())
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
    let raw = String::deserialize(deserializer)?;
    parse(&raw).ok_or_else(|| de::Error::custom(format!("invalid timestamp: {raw}")))
}
