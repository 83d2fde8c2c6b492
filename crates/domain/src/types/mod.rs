//! Domain types and models

pub mod project;
pub mod range;
pub mod time_log;

pub use project::{NewProject, Project, ProjectDayRanges};
pub use range::DayRange;
pub use time_log::{NewTimeLog, TimeLog};

/// Identifier of a user account.
pub type UserId = i64;

/// Identifier of a project.
pub type ProjectId = i64;

/// Identifier of a time log.
pub type LogId = i64;
