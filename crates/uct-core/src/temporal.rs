//! # Temporal Types — UTC-Only Timestamps
//!
//! Defines `Timestamp`, the UTC-only timestamp used for commitment
//! registration times and time-dependent locking conditions.
//!
//! ## Security Invariant
//!
//! Timestamps canonicalize as ISO8601 with Z suffix, truncated to seconds.
//! A registration time appears inside the signed unicity certificate, so a
//! local timezone offset or sub-second component would produce different
//! canonical bytes for the same instant and break certificate signature
//! checks between peers. Non-UTC inputs are rejected at construction.

use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::UctError;

/// A UTC-only timestamp, truncated to seconds precision.
///
/// # Construction
///
/// - [`Timestamp::now()`] — current UTC time, truncated.
/// - [`Timestamp::from_utc()`] — from a `DateTime<Utc>`, truncating.
/// - [`Timestamp::parse()`] — from ISO8601, rejecting non-Z offsets.
/// - [`Timestamp::from_epoch_secs()`] — from Unix seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Current UTC time, truncated to seconds.
    pub fn now() -> Self {
        Self(truncate_to_seconds(Utc::now()))
    }

    /// From a `chrono::DateTime<Utc>`, truncating sub-seconds.
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self(truncate_to_seconds(dt))
    }

    /// Parse an RFC 3339 / ISO8601 string.
    ///
    /// **Rejects non-UTC inputs.** Only the `Z` suffix is accepted — even
    /// `+00:00`, which is semantically equivalent, is rejected so that the
    /// canonical text form is unique.
    pub fn parse(s: &str) -> Result<Self, UctError> {
        if !s.ends_with('Z') {
            return Err(UctError::Validation(format!(
                "timestamp must use Z suffix (UTC only), got: {s:?}"
            )));
        }
        let dt = DateTime::parse_from_rfc3339(s)
            .map_err(|e| UctError::Validation(format!("invalid RFC 3339 timestamp {s:?}: {e}")))?;
        Ok(Self(truncate_to_seconds(dt.with_timezone(&Utc))))
    }

    /// From a Unix epoch timestamp in seconds.
    pub fn from_epoch_secs(secs: i64) -> Result<Self, UctError> {
        let dt = DateTime::from_timestamp(secs, 0)
            .ok_or_else(|| UctError::Validation(format!("invalid Unix timestamp: {secs}")))?;
        Ok(Self(dt))
    }

    /// The Unix epoch timestamp in seconds.
    pub fn epoch_secs(&self) -> i64 {
        self.0.timestamp()
    }

    /// Access the inner `DateTime<Utc>`.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Render as ISO8601 with Z suffix (e.g., `2026-01-15T12:00:00Z`).
    pub fn to_iso8601(&self) -> String {
        self.0.format("%Y-%m-%dT%H:%M:%SZ").to_string()
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_iso8601())
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_iso8601())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Truncate a `DateTime<Utc>` to seconds precision.
fn truncate_to_seconds(dt: DateTime<Utc>) -> DateTime<Utc> {
    dt.with_nanosecond(0).unwrap_or(dt)
}
