//! Calendar helpers.

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use thiserror::Error;

/// Errors returned when parsing client-supplied dates.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateParseError {
    #[error("invalid date format, use YYYY-MM-DD")]
    InvalidDate,

    #[error("invalid timestamp, use RFC 3339")]
    InvalidTimestamp,
}

/// Returns local midnight of the day containing `now`, expressed in UTC.
///
/// "Today" for daily statistics is the server's local calendar day.
pub fn start_of_local_day(now: DateTime<Local>) -> DateTime<Utc> {
    let midnight = now.date_naive().and_hms_opt(0, 0, 0).unwrap_or_default();
    match Local.from_local_datetime(&midnight) {
        chrono::LocalResult::Single(t) => t.with_timezone(&Utc),
        chrono::LocalResult::Ambiguous(earliest, _) => earliest.with_timezone(&Utc),
        // Midnight skipped by a DST jump; the day starts at the first valid instant.
        chrono::LocalResult::None => Local
            .from_local_datetime(&(midnight + chrono::Duration::hours(1)))
            .earliest()
            .map(|t| t.with_timezone(&Utc))
            .unwrap_or_else(|| now.with_timezone(&Utc)),
    }
}

/// Local midnight of the current day, in UTC.
pub fn start_of_today() -> DateTime<Utc> {
    start_of_local_day(Local::now())
}

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(value: &str) -> Result<NaiveDate, DateParseError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| DateParseError::InvalidDate)
}

/// Parses an RFC 3339 timestamp into UTC.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, DateParseError> {
    DateTime::parse_from_rfc3339(value.trim())
        .map(|t| t.with_timezone(&Utc))
        .map_err(|_| DateParseError::InvalidTimestamp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_start_of_local_day_is_midnight() {
        let now = Local::now();
        let start = start_of_local_day(now).with_timezone(&Local);
        assert_eq!(start.date_naive(), now.date_naive());
        assert_eq!(start.hour(), 0);
        assert_eq!(start.minute(), 0);
        assert_eq!(start.second(), 0);
    }

    #[test]
    fn test_start_of_local_day_not_after_now() {
        let now = Local::now();
        assert!(start_of_local_day(now) <= now.with_timezone(&Utc));
    }

    #[test]
    fn test_parse_date() {
        let date = parse_date("1990-01-31").unwrap();
        assert_eq!(date.year(), 1990);
        assert_eq!(date.month(), 1);
        assert_eq!(date.day(), 31);
    }

    #[test]
    fn test_parse_date_invalid() {
        assert_eq!(parse_date("31/01/1990"), Err(DateParseError::InvalidDate));
        assert_eq!(parse_date(""), Err(DateParseError::InvalidDate));
        assert_eq!(parse_date("1990-02-30"), Err(DateParseError::InvalidDate));
    }

    #[test]
    fn test_parse_timestamp() {
        let ts = parse_timestamp("2024-05-01T08:30:00+07:00").unwrap();
        assert_eq!(ts.hour(), 1);
        assert_eq!(ts.minute(), 30);
    }

    #[test]
    fn test_parse_timestamp_invalid() {
        assert_eq!(
            parse_timestamp("yesterday"),
            Err(DateParseError::InvalidTimestamp)
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            DateParseError::InvalidDate.to_string(),
            "invalid date format, use YYYY-MM-DD"
        );
    }
}
