use reqwest::StatusCode;
use thiserror::Error;

/// Every failure a call into the API can end with.
///
/// Nothing is retried internally: the first error hit is returned as-is.
#[derive(Debug, Error)]
pub enum Error {
    /// Caller input was rejected before any request was sent.
    #[error("{0}")]
    Validation(String),

    /// The request could not be completed (DNS, connect, timeout, body read).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with something other than `200 OK`.
    #[error("API error (HTTP {status}): {body}")]
    Api {
        /// Status code of the response.
        status: StatusCode,
        /// Raw response body, as sent by the API.
        body: String,
    },

    /// The response body did not match the expected JSON shape.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A timestamp or rate-limit header could not be parsed.
    #[error("{0}")]
    Format(#[from] FormatError),
}

impl Error {
    pub(crate) fn missing(what: &str) -> Self {
        Error::Validation(format!("must provide a {what} id"))
    }

    /// Returns the HTTP status if this is an [`Error::Api`].
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Malformed values found in an otherwise well-formed response.
#[derive(Debug, Error)]
pub enum FormatError {
    /// A timestamp string did not match the expected layout.
    #[error("invalid timestamp {value:?}: {source}")]
    Timestamp {
        /// The offending string.
        value: String,
        /// Parser failure.
        source: chrono::ParseError,
    },

    /// A rate-limit header was present but not an integer.
    #[error("invalid {name} header: {value:?}")]
    Header {
        /// Header name.
        name: &'static str,
        /// Header value, lossily decoded.
        value: String,
    },
}
