//! Timestamp normalization.
//!
//! `git log --pretty=%ai` prints author dates as `2025-07-29 22:19:01 -0400`.
//! Everything downstream compares instants, so offsets are folded into UTC
//! here once.

use chrono::{DateTime, NaiveDateTime, TimeDelta, Utc};
use thiserror::Error;

/// Accepted layouts for the date-time part, tried in order.
const DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// Reasons a timestamp cannot be normalized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimestampError {
    /// The date-time part did not match any accepted layout.
    #[error("invalid date-time: {0}")]
    DateTime(#[from] chrono::ParseError),

    /// The offset is not `+HHMM` / `-HHMM`.
    #[error("invalid UTC offset {0:?}")]
    Offset(String),

    /// Applying the offset left the representable range.
    #[error("timestamp out of range")]
    OutOfRange,
}

/// Parses `YYYY-MM-DD HH:MM:SS ±HHMM` (or the same without offset, read as
/// UTC) into a UTC instant.
///
/// # Errors
///
/// Returns a [`TimestampError`] describing why the string was rejected.
pub fn normalize_timestamp(input: &str) -> Result<DateTime<Utc>, TimestampError> {
    let input = input.trim();

    if !(input.contains(" +") || input.contains(" -")) {
        return Ok(parse_naive(input)?.and_utc());
    }

    // The check above guarantees a space.
    let (naive, offset) = input
        .rsplit_once(' ')
        .ok_or_else(|| TimestampError::Offset(input.to_string()))?;
    let naive = parse_naive(naive.trim_end())?;
    let offset = parse_offset(offset)?;

    naive
        .checked_sub_signed(offset)
        .map(|naive| naive.and_utc())
        .ok_or(TimestampError::OutOfRange)
}

fn parse_naive(input: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    let [space, iso] = DATE_TIME_FORMATS;
    NaiveDateTime::parse_from_str(input, space)
        .or_else(|e| NaiveDateTime::parse_from_str(input, iso).map_err(|_| e))
}

/// Reads `±HHMM` as a signed duration. Minutes are not capped at 59, so
/// `+0075` is one hour fifteen.
fn parse_offset(input: &str) -> Result<TimeDelta, TimestampError> {
    let invalid = || TimestampError::Offset(input.to_string());

    let (sign, digits) = if let Some(rest) = input.strip_prefix('+') {
        (1, rest)
    } else if let Some(rest) = input.strip_prefix('-') {
        (-1, rest)
    } else {
        return Err(invalid());
    };

    if digits.len() != 4 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let hours: i64 = digits[..2].parse().map_err(|_| invalid())?;
    let minutes: i64 = digits[2..].parse().map_err(|_| invalid())?;

    Ok(TimeDelta::minutes(sign * (hours * 60 + minutes)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn test_positive_offset_subtracts() {
        let ts = normalize_timestamp("2025-07-29 12:00:00 +0200").unwrap();
        assert_eq!(ts, utc(2025, 7, 29, 10, 0, 0));
    }

    #[test]
    fn test_negative_offset_adds() {
        let ts = normalize_timestamp("2025-07-29 12:00:00 -0500").unwrap();
        assert_eq!(ts, utc(2025, 7, 29, 17, 0, 0));
    }

    #[test]
    fn test_offset_with_minutes() {
        let ts = normalize_timestamp("2025-07-29 12:00:00 +0530").unwrap();
        assert_eq!(ts, utc(2025, 7, 29, 6, 30, 0));
    }

    #[test]
    fn test_offset_crosses_midnight() {
        let ts = normalize_timestamp("2025-07-29 22:19:01 -0400").unwrap();
        assert_eq!(ts, utc(2025, 7, 30, 2, 19, 1));
    }

    #[test]
    fn test_zero_offset() {
        let ts = normalize_timestamp("2025-07-29 12:00:00 +0000").unwrap();
        assert_eq!(ts, utc(2025, 7, 29, 12, 0, 0));
    }

    #[test]
    fn test_no_offset_is_utc() {
        let ts = normalize_timestamp("2025-07-29 12:00:00").unwrap();
        assert_eq!(ts, utc(2025, 7, 29, 12, 0, 0));
    }

    #[test]
    fn test_iso_separator_without_offset() {
        let ts = normalize_timestamp("2025-07-29T12:00:00").unwrap();
        assert_eq!(ts, utc(2025, 7, 29, 12, 0, 0));
    }

    #[test]
    fn test_surrounding_whitespace() {
        let ts = normalize_timestamp("  2025-07-29 12:00:00 +0100 ").unwrap();
        assert_eq!(ts, utc(2025, 7, 29, 11, 0, 0));
    }

    #[test]
    fn test_garbage_date() {
        let err = normalize_timestamp("not a date").unwrap_err();
        assert!(matches!(err, TimestampError::DateTime(_)));
    }

    #[test]
    fn test_garbage_date_with_offset() {
        let err = normalize_timestamp("yesterday noon +0200").unwrap_err();
        assert!(matches!(err, TimestampError::DateTime(_)));
    }

    #[test]
    fn test_short_offset() {
        let err = normalize_timestamp("2025-07-29 12:00:00 +02").unwrap_err();
        assert_eq!(err, TimestampError::Offset("+02".to_string()));
    }

    #[test]
    fn test_non_numeric_offset() {
        let err = normalize_timestamp("2025-07-29 12:00:00 +02ab").unwrap_err();
        assert!(matches!(err, TimestampError::Offset(_)));
    }

    #[test]
    fn test_offset_minutes_past_sixty_carry_over() {
        let ts = normalize_timestamp("2025-07-29 12:00:00 +0075").unwrap();
        assert_eq!(ts, utc(2025, 7, 29, 10, 45, 0));
    }

    #[test]
    fn test_offset_beyond_a_day() {
        let ts = normalize_timestamp("2025-07-29 12:00:00 -9900").unwrap();
        assert_eq!(ts, utc(2025, 8, 2, 15, 0, 0));
    }

    #[test]
    fn test_fractional_seconds_with_offset() {
        let ts = normalize_timestamp("2025-07-29 12:00:00.250 +0100").unwrap();
        assert_eq!(ts, utc(2025, 7, 29, 11, 0, 0) + TimeDelta::milliseconds(250));
    }

    #[test]
    fn test_empty_input() {
        assert!(normalize_timestamp("").is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = normalize_timestamp("2025-07-29 12:00:00 +xx").unwrap_err();
        assert_eq!(err.to_string(), "invalid UTC offset \"+xx\"");
    }
}
