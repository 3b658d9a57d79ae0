//! RFC 3339 timestamps with nanosecond precision
//!
//! Timestamps are rendered in UTC the way Go's `RFC3339Nano` layout does it:
//! the fractional second keeps up to nine digits with trailing zeros removed,
//! and is left out entirely on a whole second.
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use plainlog::core::timestamp;
//!
//! let time = Utc.with_ymd_and_hms(2023, 6, 1, 10, 0, 0).unwrap()
//!     + chrono::Duration::nanoseconds(123_456_789);
//! assert_eq!(timestamp::format_rfc3339_nano(&time), "2023-06-01T10:00:00.123456789Z");
//! ```

use super::error::{LoggerError, Result};
use chrono::{DateTime, Utc};

const NANOS_PER_SEC: u32 = 1_000_000_000;

/// Render a timestamp as `YYYY-MM-DDTHH:MM:SS[.fraction]Z`
///
/// Years outside `0..=9999` render with a sign and extra digits, which
/// [`parse_rfc3339_nano`] rejects, so the round trip holds only inside that
/// range.
#[must_use]
pub fn format_rfc3339_nano(time: &DateTime<Utc>) -> String {
    let mut out = time.format("%Y-%m-%dT%H:%M:%S").to_string();

    // Leap seconds carry their extra second in the nanosecond field
    let nanos = time.timestamp_subsec_nanos() % NANOS_PER_SEC;
    if nanos != 0 {
        let fraction = format!("{:09}", nanos);
        out.push('.');
        out.push_str(fraction.trim_end_matches('0'));
    }

    out.push('Z');
    out
}

/// Parse any RFC 3339 timestamp, normalizing the offset to UTC
pub fn parse_rfc3339_nano(input: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(input)
        .map(|time| time.with_timezone(&Utc))
        .map_err(|e| LoggerError::timestamp_parse(input, e))
}

/// Serde adapter for `#[serde(with = "...")]` on `DateTime<Utc>` fields
pub mod rfc3339_nano {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_rfc3339_nano(time))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_rfc3339_nano(&raw).map_err(serde::de::Error::custom)
    }
}
