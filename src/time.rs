//! The API writes timestamps in UTC without an offset, either to the second
//! (`2016-11-01T02:54:43`) or to the microsecond (`2011-04-21T18:47:32.503946`).
//!
//! An empty string is not an error: it parses to [`zero`].

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::error::FormatError;

/// `strftime` layout of second-precision timestamps.
pub const FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// `strftime` layout of microsecond-precision timestamps.
pub const FORMAT_EXACT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// The zero-value timestamp (the Unix epoch).
///
/// Empty timestamp strings parse to this value, and every normalized field
/// holds it until its response has been normalized.
pub fn zero() -> DateTime<Utc> {
    DateTime::<Utc>::default()
}

/// Parses a second-precision timestamp.
///
/// # Errors
///
/// Returns [`FormatError::Timestamp`] if `value` is non-empty and malformed.
pub fn parse(value: &str) -> Result<DateTime<Utc>, FormatError> {
    parse_with(value, FORMAT)
}

/// Parses a microsecond-precision timestamp.
///
/// # Errors
///
/// Returns [`FormatError::Timestamp`] if `value` is non-empty and malformed.
pub fn parse_exact(value: &str) -> Result<DateTime<Utc>, FormatError> {
    parse_with(value, FORMAT_EXACT)
}

/// Formats `date` to the second, e.g. for a `since` query parameter.
pub fn format(date: &DateTime<Utc>) -> String {
    date.format(FORMAT).to_string()
}

/// Formats `date` to the microsecond.
pub fn format_exact(date: &DateTime<Utc>) -> String {
    date.format(FORMAT_EXACT).to_string()
}

fn parse_with(value: &str, layout: &str) -> Result<DateTime<Utc>, FormatError> {
    if value.is_empty() {
        return Ok(zero());
    }
    NaiveDateTime::parse_from_str(value, layout)
        .map(|naive| naive.and_utc())
        .map_err(|source| FormatError::Timestamp {
            value: value.to_string(),
            source,
        })
}
