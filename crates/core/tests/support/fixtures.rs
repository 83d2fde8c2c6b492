use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use daylog_core::Clock;
use daylog_domain::{DayRange, Project, ProjectId, TimeLog, UserId};

/// Clock pinned to a single instant.
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Clock that moves forward by `step` every time it is read.
pub struct SteppingClock {
    start: DateTime<Utc>,
    step: Duration,
    reads: AtomicI64,
}

impl SteppingClock {
    pub fn new(start: DateTime<Utc>, step: Duration) -> Self {
        Self { start, step, reads: AtomicI64::new(0) }
    }

    pub fn reads(&self) -> i64 {
        self.reads.load(Ordering::SeqCst)
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let read = self.reads.fetch_add(1, Ordering::SeqCst);
        self.start + self.step * read as i32
    }
}

pub fn at(month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, month, day, hour, 0, 0).unwrap()
}

pub fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, month, day).unwrap()
}

pub fn range(start: (u32, u32), end: (u32, u32)) -> DayRange {
    DayRange::new(date(start.0, start.1), date(end.0, end.1)).unwrap()
}

pub fn project(id: ProjectId, owner_id: UserId) -> Project {
    Project {
        id,
        title: format!("Project {id}"),
        owner_id,
        date_created: at(1, 1, 0),
    }
}

pub struct LogBuilder {
    next_id: i64,
    logs: Vec<TimeLog>,
}

impl LogBuilder {
    pub fn new() -> Self {
        Self { next_id: 1, logs: Vec::new() }
    }

    pub fn closed(
        mut self,
        user_id: UserId,
        project_id: ProjectId,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Self {
        self.push(user_id, project_id, start, Some(end));
        self
    }

    pub fn open(mut self, user_id: UserId, project_id: ProjectId, start: DateTime<Utc>) -> Self {
        self.push(user_id, project_id, start, None);
        self
    }

    pub fn build(self) -> Vec<TimeLog> {
        self.logs
    }

    fn push(
        &mut self,
        user_id: UserId,
        project_id: ProjectId,
        start: DateTime<Utc>,
        end: Option<DateTime<Utc>>,
    ) {
        self.logs.push(TimeLog {
            id: self.next_id,
            project_id,
            user_id,
            start_time: start,
            end_time: end,
            format_min: None,
            format_sec: None,
        });
        self.next_id += 1;
    }
}
