//! Timestamp normalization and display formatting.
//!
//! Task services have delivered schedule fields as epoch seconds, epoch
//! milliseconds and ISO-8601 strings. Everything is normalized to
//! [`DateTime<Utc>`] before it reaches the hierarchy or projection code.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Epoch values above this magnitude are milliseconds, smaller ones seconds.
pub const EPOCH_MILLIS_THRESHOLD: i64 = 100_000_000_000;

/// Display pattern for date and time (`yyyy-MM-dd HH:mm`).
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Display pattern for calendar dates (`yyyy-MM-dd`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

const NAIVE_DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Converts an epoch value of either resolution into a UTC instant.
///
/// Zero is treated as "no value", mirroring how the task service encodes
/// unset timestamps.
#[must_use]
pub fn from_epoch(value: i64) -> Option<DateTime<Utc>> {
    if value == 0 {
        return None;
    }
    if value.unsigned_abs() > EPOCH_MILLIS_THRESHOLD.unsigned_abs() {
        DateTime::from_timestamp_millis(value)
    } else {
        DateTime::from_timestamp(value, 0)
    }
}

/// Parses a textual timestamp into a UTC instant.
///
/// Accepts RFC 3339, naive date-times (read as UTC), bare dates (midnight
/// UTC) and digit-only strings (epoch values). Blank input yields `None`.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(epoch) = trimmed.parse::<i64>() {
        return from_epoch(epoch);
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Some(naive) = NAIVE_DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
    {
        return Some(Utc.from_utc_datetime(&naive));
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// Formats an instant as `yyyy-MM-dd HH:mm` in the given fixed offset.
#[must_use]
pub fn format_timestamp(value: DateTime<Utc>, offset: FixedOffset) -> String {
    value
        .with_timezone(&offset)
        .format(DATE_TIME_FORMAT)
        .to_string()
}

/// Formats an instant as `yyyy-MM-dd` in the given fixed offset.
#[must_use]
pub fn format_date(value: DateTime<Utc>, offset: FixedOffset) -> String {
    value.with_timezone(&offset).format(DATE_FORMAT).to_string()
}
