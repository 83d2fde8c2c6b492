//! Error types used throughout the application

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for Daylog
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum DaylogError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Missing 'time_zone' in request")]
    MissingTimeZone,

    #[error("Given invalid time zone: {0}")]
    InvalidTimeZone(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for Daylog operations
pub type Result<T> = std::result::Result<T, DaylogError>;

/// Violations of the day-range ordering contract.
///
/// Raised by the checked [`crate::DayRange`] constructor and by the range
/// merger when its input is not sorted by start day.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeError {
    #[error("day range ends on {end} before it starts on {start}")]
    Inverted { start: NaiveDate, end: NaiveDate },

    #[error("day range {index} starts on {start}, before the preceding range start {previous}")]
    Unsorted { index: usize, previous: NaiveDate, start: NaiveDate },
}

impl From<RangeError> for DaylogError {
    fn from(value: RangeError) -> Self {
        Self::InvalidInput(value.to_string())
    }
}
