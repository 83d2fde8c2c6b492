//! Unix-second timestamp columns

use chrono::{DateTime, Utc};

pub(crate) fn to_unix(timestamp: DateTime<Utc>) -> i64 {
    timestamp.timestamp()
}

/// Convert a stored Unix-second value; `column` is only used for the error.
pub(crate) fn from_unix(secs: i64, column: usize) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0).ok_or(rusqlite::Error::IntegralValueOutOfRange(column, secs))
}
