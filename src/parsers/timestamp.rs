use chrono::{DateTime, Local, TimeZone};

use crate::error::TimestampError;

/// Parse a Slack `ts` value (`<seconds>` or `<seconds>.<fraction>`) into local time
///
/// The fractional part only orders messages within a second and is discarded. Returns
/// `Ok(None)` for an empty string.
///
/// # Examples
///
/// ```
/// use slack_dump::parsers::parse_timestamp;
///
/// let ts = parse_timestamp("1700000000.000200")?.unwrap();
/// assert_eq!(ts.timestamp(), 1700000000);
/// assert!(parse_timestamp("")?.is_none());
/// # Ok::<(), slack_dump::error::TimestampError>(())
/// ```
pub fn parse_timestamp(raw: &str) -> Result<Option<DateTime<Local>>, TimestampError> {
    parse_timestamp_in(raw, &Local)
}

/// Same as [`parse_timestamp`] for an explicit time zone
pub fn parse_timestamp_in<Tz: TimeZone>(
    raw: &str,
    tz: &Tz,
) -> Result<Option<DateTime<Tz>>, TimestampError> {
    if raw.is_empty() {
        return Ok(None);
    }

    let (seconds, fraction) = match raw.split_once('.') {
        Some((seconds, fraction)) => (seconds, Some(fraction)),
        None => (raw, None),
    };
    if fraction.is_some_and(|f| f.contains('.')) {
        return Err(TimestampError::TooManyDots(raw.to_string()));
    }

    let secs: i64 =
        seconds.parse().map_err(|_| TimestampError::InvalidSeconds(raw.to_string()))?;
    let utc = DateTime::from_timestamp(secs, 0)
        .ok_or_else(|| TimestampError::OutOfRange(raw.to_string()))?;

    Ok(Some(utc.with_timezone(tz)))
}

/// Zero-padded `YYYY-MM-DD` of the calendar day in the timestamp's own zone
pub fn day_key<Tz: TimeZone>(timestamp: &DateTime<Tz>) -> String {
    timestamp.date_naive().format("%Y-%m-%d").to_string()
}
