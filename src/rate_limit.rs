use chrono::{DateTime, Utc};
use reqwest::header::HeaderMap;

use crate::{error::FormatError, time};

/// Header carrying the number of calls left in the current window.
pub const REMAINING: &str = "X-Ratelimit-Remaining";

/// Header carrying the size of the window.
pub const LIMIT: &str = "X-Ratelimit-Limit";

/// Header carrying the Unix time (seconds) at which the window resets.
pub const RESET: &str = "X-Ratelimit-Reset";

/// Call quota as reported by the headers of the last response.
///
/// Headers missing from a response leave their field at its zero value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimit {
    /// Calls left before the window resets.
    pub remaining: i64,
    /// Calls allowed per window.
    pub limit: i64,
    /// When the window resets.
    pub reset_at: DateTime<Utc>,
}

impl Default for RateLimit {
    fn default() -> Self {
        Self {
            remaining: 0,
            limit: 0,
            reset_at: time::zero(),
        }
    }
}

impl RateLimit {
    /// Reads the three rate-limit headers out of `headers`.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::Header`] if a header is present but not an integer,
    /// or if the reset time is out of range.
    pub fn from_headers(headers: &HeaderMap) -> Result<Self, FormatError> {
        let mut limits = Self::default();
        if let Some(remaining) = int_header(headers, REMAINING)? {
            limits.remaining = remaining;
        }
        if let Some(limit) = int_header(headers, LIMIT)? {
            limits.limit = limit;
        }
        if let Some(reset) = int_header(headers, RESET)? {
            limits.reset_at = DateTime::from_timestamp(reset, 0).ok_or_else(|| FormatError::Header {
                name: RESET,
                value: reset.to_string(),
            })?;
        }
        Ok(limits)
    }
}

fn int_header(headers: &HeaderMap, name: &'static str) -> Result<Option<i64>, FormatError> {
    let Some(raw) = headers.get(name) else {
        return Ok(None);
    };
    let value = String::from_utf8_lossy(raw.as_bytes());
    value
        .trim()
        .parse::<i64>()
        .map(Some)
        .map_err(|_| FormatError::Header {
            name,
            value: value.into_owned(),
        })
}
