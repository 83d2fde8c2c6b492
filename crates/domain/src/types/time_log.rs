//! Time logs recorded against projects

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::{LogId, ProjectId, UserId};

/// A single time log.
///
/// A log without an `end_time` is still running and is treated as ongoing
/// through the current moment. `format_min`/`format_sec` hold the display
/// duration the client entered, if any; they never affect day ranges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeLog {
    pub id: LogId,
    pub project_id: ProjectId,
    pub user_id: UserId,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub format_min: Option<u32>,
    #[serde(default)]
    pub format_sec: Option<u32>,
}

impl TimeLog {
    pub fn is_open(&self) -> bool {
        self.end_time.is_none()
    }

    /// End of the log, or `now` when it is still running.
    pub fn end_or(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        self.end_time.unwrap_or(now)
    }

    pub fn duration(&self, now: DateTime<Utc>) -> Duration {
        self.end_or(now) - self.start_time
    }
}

/// Parameters for recording a new log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTimeLog {
    pub project_id: ProjectId,
    pub user_id: UserId,
    pub start_time: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format_min: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format_sec: Option<u32>,
}

impl NewTimeLog {
    /// A log without a display format.
    pub fn new(
        project_id: ProjectId,
        user_id: UserId,
        start_time: DateTime<Utc>,
        end_time: Option<DateTime<Utc>>,
    ) -> Self {
        Self { project_id, user_id, start_time, end_time, format_min: None, format_sec: None }
    }

    #[must_use]
    pub fn with_format(mut self, minutes: u32, seconds: u32) -> Self {
        self.format_min = Some(minutes);
        self.format_sec = Some(seconds);
        self
    }
}
