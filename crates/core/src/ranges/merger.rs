//! Day-range merger
//!
//! Collapses a start-sorted sequence of [`DayRange`]s into the minimal
//! sorted sequence of non-overlapping ranges covering the same days.

use chrono::NaiveDate;
use daylog_domain::{DayRange, RangeError};

/// Merge start-sorted day ranges that overlap or touch.
///
/// Single left-to-right scan. The input is never mutated; the running range
/// is an owned copy that is extended in place and emitted once a strict gap
/// (`current.end < next.start`) appears.
///
/// - An empty slice yields an empty vector.
/// - A single range is returned unchanged.
/// - Equal or touching boundaries merge.
///
/// # Errors
/// Returns [`RangeError::Unsorted`] if any range starts before its
/// predecessor. Sortedness is checked during the same scan.
pub fn merge_ranges(ranges: &[DayRange]) -> Result<Vec<DayRange>, RangeError> {
    let Some((first, rest)) = ranges.split_first() else {
        return Ok(Vec::new());
    };

    if rest.is_empty() {
        return Ok(vec![*first]);
    }

    let mut merged = Vec::with_capacity(ranges.len());
    let mut current = *first;
    let mut previous_start = first.start();

    for (offset, candidate) in rest.iter().enumerate() {
        if candidate.start() < previous_start {
            return Err(RangeError::Unsorted {
                index: offset + 1,
                previous: previous_start,
                start: candidate.start(),
            });
        }
        previous_start = candidate.start();

        if current.overlaps_or_touches(candidate) {
            current = current.extend_to(most_recent_day(current.end(), candidate.end()));
        } else {
            merged.push(current);
            current = *candidate;
        }
    }

    merged.push(current);
    Ok(merged)
}

/// The later of two days.
pub fn most_recent_day(first: NaiveDate, second: NaiveDate) -> NaiveDate {
    if first >= second {
        first
    } else {
        second
    }
}
