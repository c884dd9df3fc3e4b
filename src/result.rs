use crate::error::Error as DisqusErr;

/// Result type returned by every fallible operation of this crate.
pub type Result<T> = std::result::Result<T, DisqusErr>;
