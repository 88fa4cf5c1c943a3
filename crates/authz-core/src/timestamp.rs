//! UTC timestamp formatting.
//!
//! Absolute timestamps are written as `yyyy-MM-dd'T'HH:mm:ss.SSS'Z'`, always in
//! UTC with millisecond precision. Formatting is a pure function over its
//! input, so it is safe to call from any number of threads at once.
//!
//! The module doubles as a serde adapter:
//!
//! ```rust
//! use chrono::{DateTime, Utc};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Issued {
//!     #[serde(with = "authz_core::timestamp")]
//!     expires_at: DateTime<Utc>,
//! }
//! ```

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serializer};

use crate::error::Error;

/// The fixed wire format.
pub const FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Formats a timestamp.
#[must_use]
pub fn format(timestamp: &DateTime<Utc>) -> String {
    timestamp.format(FORMAT).to_string()
}

/// Parses a timestamp written by [`format`].
///
/// # Errors
///
/// Returns [`Error::Validation`] if the input does not match [`FORMAT`].
pub fn parse(input: &str) -> crate::Result<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(input, FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|e| Error::Validation(format!("invalid timestamp '{input}': {e}")))
}

/// Builds a timestamp from Unix epoch milliseconds.
///
/// # Errors
///
/// Returns [`Error::Validation`] if the value is outside the representable range.
pub fn from_epoch_millis(millis: i64) -> crate::Result<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis)
        .ok_or_else(|| Error::Validation(format!("timestamp out of range: {millis}")))
}

/// Serializes a timestamp as a string in [`FORMAT`].
///
/// # Errors
///
/// Propagates serializer errors.
pub fn serialize<S>(timestamp: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format(timestamp))
}

/// Deserializes a timestamp from a string in [`FORMAT`].
///
/// # Errors
///
/// Fails if the value is not a string or does not match [`FORMAT`].
pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse(&raw).map_err(serde::de::Error::custom)
}
