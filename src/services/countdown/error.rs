// Error types for countdown derivation

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Result type alias for countdown operations
pub type Result<T> = std::result::Result<T, CountdownError>;

/// Errors raised at the boundary where external values become instants
/// or settings.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CountdownError {
    /// Timestamp is not a representable instant
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// Setting is out of its allowed range
    #[error("Invalid setting '{field}': {reason}")]
    InvalidSetting { field: &'static str, reason: String },

    /// Ticker was started outside a tokio runtime
    #[error("No tokio runtime available to drive the ticker")]
    RuntimeUnavailable,
}

/// Converts epoch milliseconds into an instant.
pub fn timestamp_from_millis(millis: i64) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis)
        .ok_or_else(|| CountdownError::InvalidTimestamp(format!("{millis} ms is out of range")))
}

/// Converts floating epoch milliseconds, as produced by browser-style
/// clocks, into an instant. NaN and infinities are rejected.
pub fn timestamp_from_millis_f64(millis: f64) -> Result<DateTime<Utc>> {
    if !millis.is_finite() {
        return Err(CountdownError::InvalidTimestamp(format!(
            "{millis} is not a finite number of milliseconds"
        )));
    }
    if millis < i64::MIN as f64 || millis > i64::MAX as f64 {
        return Err(CountdownError::InvalidTimestamp(format!(
            "{millis} ms is out of range"
        )));
    }
    timestamp_from_millis(millis.floor() as i64)
}

/// Parses an RFC 3339 timestamp such as `2026-03-14T09:00:00Z`.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value.trim())
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|err| CountdownError::InvalidTimestamp(format!("'{value}': {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn millis_round_trip_for_valid_values() {
        let expected = Utc.with_ymd_and_hms(2026, 3, 14, 9, 0, 0).unwrap();
        let parsed = timestamp_from_millis(expected.timestamp_millis()).unwrap();
        assert_eq!(parsed, expected);
    }

    #[test]
    fn millis_out_of_range_is_invalid() {
        let err = timestamp_from_millis(i64::MAX).unwrap_err();
        assert!(matches!(err, CountdownError::InvalidTimestamp(_)));
    }

    #[test]
    fn nan_and_infinite_millis_fail_fast() {
        assert!(matches!(
            timestamp_from_millis_f64(f64::NAN),
            Err(CountdownError::InvalidTimestamp(_))
        ));
        assert!(matches!(
            timestamp_from_millis_f64(f64::INFINITY),
            Err(CountdownError::InvalidTimestamp(_))
        ));
        assert!(timestamp_from_millis_f64(1_773_478_800_000.4).is_ok());
    }

    #[test]
    fn rfc3339_parsing_normalizes_to_utc() {
        let parsed = parse_timestamp("2026-03-14T11:00:00+02:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2026, 3, 14, 9, 0, 0).unwrap());

        let err = parse_timestamp("next tuesday").unwrap_err();
        assert!(err.to_string().starts_with("Invalid timestamp"));
    }
}
