//! Calendar-day ranges
//!
//! A [`DayRange`] is an inclusive span of calendar days during which a
//! project had at least one logged time entry. Days carry no time-of-day
//! component; callers normalize timestamps to a single time zone before
//! building ranges.

use std::fmt;

use chrono::NaiveDate;
use serde::de::{self, Deserializer};
use serde::ser::{SerializeTuple, Serializer};
use serde::{Deserialize, Serialize};

use crate::constants::DAY_ISO_FORMAT;

const BARE_DAY_FORMAT: &str = "%Y-%m-%d";
use crate::errors::RangeError;

/// Inclusive `[start, end]` span of calendar days.
///
/// The constructor guarantees `end >= start`, and no method can break that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DayRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DayRange {
    /// Build a range, rejecting an end day before the start day.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, RangeError> {
        if end < start {
            return Err(RangeError::Inverted { start, end });
        }
        Ok(Self { start, end })
    }

    /// A range covering exactly one day.
    pub const fn single(day: NaiveDate) -> Self {
        Self { start: day, end: day }
    }

    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Extend the end of this range to `end` if that is later.
    #[must_use]
    pub fn extend_to(self, end: NaiveDate) -> Self {
        Self { start: self.start, end: self.end.max(end) }
    }

    /// Whether `next` begins on or before this range's end day.
    ///
    /// Touching ranges (`self.end == next.start`) count as overlapping. Only
    /// a strict gap keeps two ranges apart.
    pub fn overlaps_or_touches(&self, next: &Self) -> bool {
        next.start <= self.end
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }

    /// Number of calendar days covered, both ends included.
    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Iterate every day in the range in ascending order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |day| *day <= end)
    }
}

impl fmt::Display for DayRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl From<DayRange> for (NaiveDate, NaiveDate) {
    fn from(range: DayRange) -> Self {
        (range.start, range.end)
    }
}

impl TryFrom<(NaiveDate, NaiveDate)> for DayRange {
    type Error = RangeError;

    fn try_from((start, end): (NaiveDate, NaiveDate)) -> Result<Self, Self::Error> {
        Self::new(start, end)
    }
}

// Serialized as `["2024-01-01T00:00:00.000Z", "2024-01-03T00:00:00.000Z"]`.
impl Serialize for DayRange {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(2)?;
        tuple.serialize_element(&self.start.format(DAY_ISO_FORMAT).to_string())?;
        tuple.serialize_element(&self.end.format(DAY_ISO_FORMAT).to_string())?;
        tuple.end()
    }
}

impl<'de> Deserialize<'de> for DayRange {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (start, end) = <(String, String)>::deserialize(deserializer)?;
        let start = parse_day(&start).map_err(de::Error::custom)?;
        let end = parse_day(&end).map_err(de::Error::custom)?;
        Self::new(start, end).map_err(de::Error::custom)
    }
}

/// Accepts the serialized midnight form or a bare `YYYY-MM-DD`. The whole
/// string must match.
fn parse_day(raw: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(raw, DAY_ISO_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(raw, BARE_DAY_FORMAT))
}
