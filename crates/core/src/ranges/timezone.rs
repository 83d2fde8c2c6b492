//! IANA time-zone parsing for day-range requests

use chrono_tz::Tz;
use daylog_domain::{DaylogError, Result};

/// Resolve a caller-supplied IANA zone name such as `America/Los_Angeles`.
///
/// # Errors
/// - [`DaylogError::MissingTimeZone`] when no name (or only whitespace) is
///   given.
/// - [`DaylogError::InvalidTimeZone`] when the name is not a known zone.
pub fn parse_time_zone(raw: Option<&str>) -> Result<Tz> {
    let name = raw
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .ok_or(DaylogError::MissingTimeZone)?;

    name.parse::<Tz>().map_err(|_| DaylogError::InvalidTimeZone(name.to_string()))
}
