//! Day-range service - core business logic
//!
//! For a user, fans out over every owned project, extracts each project's
//! day ranges from its logs and merges them.

use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use daylog_domain::{
    DayRange, DaylogError, Project, ProjectDayRanges, ProjectId, Result, UserId,
};
use futures::future::try_join_all;
use tracing::{debug, info};

use super::extractor::extract_day_ranges;
use super::merger::merge_ranges;
use super::ports::{Clock, ProjectRepository, SystemClock, TimeLogRepository};
use super::timezone::parse_time_zone;

/// Day-range service
pub struct DayRangeService {
    projects: Arc<dyn ProjectRepository>,
    logs: Arc<dyn TimeLogRepository>,
    clock: Arc<dyn Clock>,
    default_time_zone: Option<String>,
}

impl DayRangeService {
    /// Create a new service backed by the system clock
    pub fn new(projects: Arc<dyn ProjectRepository>, logs: Arc<dyn TimeLogRepository>) -> Self {
        Self { projects, logs, clock: Arc::new(SystemClock), default_time_zone: None }
    }

    /// Replace the clock used to resolve open logs
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Zone used when a request doesn't name one
    ///
    /// Without a default, a request with no zone fails with
    /// [`DaylogError::MissingTimeZone`].
    pub fn with_default_time_zone(mut self, time_zone: Option<String>) -> Self {
        self.default_time_zone = time_zone;
        self
    }

    /// Look up a project owned by `user_id`
    ///
    /// # Errors
    /// Returns [`DaylogError::NotFound`] if the project doesn't exist or
    /// belongs to another user.
    pub async fn project_for_user(
        &self,
        user_id: UserId,
        project_id: ProjectId,
    ) -> Result<Project> {
        self.projects
            .get_project(user_id, project_id)
            .await?
            .ok_or_else(|| DaylogError::NotFound(format!("Project {project_id} doesn't exist")))
    }

    /// Merged day ranges for one project
    pub async fn day_ranges_for_project(
        &self,
        user_id: UserId,
        project_id: ProjectId,
        tz: Tz,
    ) -> Result<Vec<DayRange>> {
        self.project_ranges_at(user_id, project_id, tz, self.clock.now()).await
    }

    async fn project_ranges_at(
        &self,
        user_id: UserId,
        project_id: ProjectId,
        tz: Tz,
        now: DateTime<Utc>,
    ) -> Result<Vec<DayRange>> {
        let logs = self.logs.logs_for_project(user_id, project_id).await?;
        let extracted = extract_day_ranges(&logs, tz, now);
        let merged = merge_ranges(&extracted)?;

        debug!(
            project_id,
            logs = logs.len(),
            extracted = extracted.len(),
            merged = merged.len(),
            "merged project day ranges"
        );

        Ok(merged)
    }

    /// Merged day ranges for every project owned by `user_id`
    ///
    /// A missing or blank zone falls back to the configured default. The
    /// zone is validated before any repository call. Projects are processed
    /// concurrently against a single reading of the clock; the first failure
    /// aborts the whole request.
    pub async fn day_ranges_for_user(
        &self,
        user_id: UserId,
        time_zone: Option<&str>,
    ) -> Result<ProjectDayRanges> {
        let requested = time_zone.map(str::trim).filter(|zone| !zone.is_empty());
        let tz = parse_time_zone(requested.or(self.default_time_zone.as_deref()))?;
        let started = Instant::now();
        let now = self.clock.now();

        let projects = self.projects.list_projects(user_id).await?;

        let lookups = projects.iter().map(|project| async move {
            let ranges = self.project_ranges_at(user_id, project.id, tz, now).await?;
            Ok::<_, DaylogError>((project.id, ranges))
        });
        let ranges: ProjectDayRanges = try_join_all(lookups).await?.into_iter().collect();

        info!(
            user_id,
            projects = ranges.len(),
            time_zone = tz.name(),
            duration_ms = started.elapsed().as_millis() as u64,
            "computed day ranges"
        );

        Ok(ranges)
    }
}
