//! Day-range extraction from raw time logs
//!
//! Converts each log's timestamps into calendar days in the caller's zone,
//! groups logs by start day and keeps the latest end day per group. The
//! result is sorted by start day, which is the input contract of
//! [`merge_ranges`](super::merger::merge_ranges).

use std::collections::BTreeMap;

use chrono::{DateTime, Days, NaiveDate, Utc};
use chrono_tz::Tz;
use daylog_domain::constants::END_DAY_BUFFER_DAYS;
use daylog_domain::{DayRange, TimeLog};
use tracing::warn;

use super::merger::most_recent_day;

/// Build one day range per distinct local start day.
///
/// A log's end day is the local date of its end timestamp plus one day of
/// buffer. Open logs end at `now`, so they count as active through the
/// current day.
pub fn extract_day_ranges(logs: &[TimeLog], tz: Tz, now: DateTime<Utc>) -> Vec<DayRange> {
    let mut end_by_start: BTreeMap<NaiveDate, NaiveDate> = BTreeMap::new();

    for log in logs {
        let start_day = local_day(log.start_time, tz);
        let end_day = buffered_end_day(local_day(log.end_or(now), tz));

        end_by_start
            .entry(start_day)
            .and_modify(|end| *end = most_recent_day(*end, end_day))
            .or_insert(end_day);
    }

    end_by_start
        .into_iter()
        .map(|(start, end)| {
            DayRange::new(start, end).unwrap_or_else(|err| {
                warn!(%start, %end, error = %err, "log ends before it starts, clamping");
                DayRange::single(start)
            })
        })
        .collect()
}

/// Calendar date of `timestamp` as observed in `tz`.
pub fn local_day(timestamp: DateTime<Utc>, tz: Tz) -> NaiveDate {
    timestamp.with_timezone(&tz).date_naive()
}

fn buffered_end_day(day: NaiveDate) -> NaiveDate {
    day.checked_add_days(Days::new(END_DAY_BUFFER_DAYS)).unwrap_or(day)
}
