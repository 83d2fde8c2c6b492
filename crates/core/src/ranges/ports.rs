//! Port interfaces for day-range computation
//!
//! These traits define the boundaries between core business logic
//! and infrastructure implementations.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use daylog_domain::{
    LogId, NewProject, NewTimeLog, Project, ProjectId, Result, TimeLog, UserId,
};

/// Trait for reading and creating projects
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// All projects owned by `user_id`, ordered by id
    async fn list_projects(&self, user_id: UserId) -> Result<Vec<Project>>;

    /// A single project, or `None` if it doesn't exist or isn't owned by
    /// `user_id`
    async fn get_project(&self, user_id: UserId, project_id: ProjectId)
        -> Result<Option<Project>>;

    /// Create a project and return it with its assigned id
    async fn insert_project(&self, project: NewProject) -> Result<Project>;
}

/// Trait for persisting time logs
#[async_trait]
pub trait TimeLogRepository: Send + Sync {
    /// Logs recorded by `user_id` against `project_id`, ordered by start time
    async fn logs_for_project(
        &self,
        user_id: UserId,
        project_id: ProjectId,
    ) -> Result<Vec<TimeLog>>;

    /// Record a new log
    async fn insert_log(&self, log: NewTimeLog) -> Result<TimeLog>;

    /// Set the end time of a running log recorded by `user_id`
    async fn close_log(&self, user_id: UserId, log_id: LogId, end_time: DateTime<Utc>)
        -> Result<()>;
}

/// Source of the current wall-clock time
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Real system clock
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
