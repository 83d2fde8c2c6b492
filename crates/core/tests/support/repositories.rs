//! Mock repository implementations for testing
//!
//! Provides in-memory mocks for the core repository ports, enabling
//! deterministic tests without database dependencies.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use daylog_core::{ProjectRepository, TimeLogRepository};
use daylog_domain::{
    DaylogError, LogId, NewProject, NewTimeLog, Project, ProjectId, Result as DomainResult,
    TimeLog, UserId,
};

/// In-memory mock for `ProjectRepository`.
///
/// Counts `list_projects` calls so tests can assert that validation happens
/// before any I/O.
#[derive(Default, Clone)]
pub struct MockProjectRepository {
    projects: Arc<Mutex<Vec<Project>>>,
    list_calls: Arc<AtomicUsize>,
}

impl MockProjectRepository {
    /// Create a new mock seeded with the provided projects.
    pub fn new(projects: Vec<Project>) -> Self {
        Self { projects: Arc::new(Mutex::new(projects)), list_calls: Arc::default() }
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProjectRepository for MockProjectRepository {
    async fn list_projects(&self, user_id: UserId) -> DomainResult<Vec<Project>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        let mut owned: Vec<_> = self
            .projects
            .lock()
            .unwrap()
            .iter()
            .filter(|project| project.owner_id == user_id)
            .cloned()
            .collect();
        owned.sort_by_key(|project| project.id);
        Ok(owned)
    }

    async fn get_project(
        &self,
        user_id: UserId,
        project_id: ProjectId,
    ) -> DomainResult<Option<Project>> {
        Ok(self
            .projects
            .lock()
            .unwrap()
            .iter()
            .find(|project| project.id == project_id && project.owner_id == user_id)
            .cloned())
    }

    async fn insert_project(&self, project: NewProject) -> DomainResult<Project> {
        let mut projects = self.projects.lock().unwrap();
        let id = projects.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        let created = Project {
            id,
            title: project.title,
            owner_id: project.owner_id,
            date_created: Utc::now(),
        };
        projects.push(created.clone());
        Ok(created)
    }
}

/// In-memory mock for `TimeLogRepository`.
#[derive(Default, Clone)]
pub struct MockTimeLogRepository {
    logs: Arc<Mutex<Vec<TimeLog>>>,
    failing_project: Option<ProjectId>,
}

impl MockTimeLogRepository {
    /// Create a new mock seeded with the provided logs.
    pub fn new(logs: Vec<TimeLog>) -> Self {
        Self { logs: Arc::new(Mutex::new(logs)), failing_project: None }
    }

    /// Make lookups for `project_id` fail with a database error.
    pub fn failing_for(mut self, project_id: ProjectId) -> Self {
        self.failing_project = Some(project_id);
        self
    }
}

#[async_trait]
impl TimeLogRepository for MockTimeLogRepository {
    async fn logs_for_project(
        &self,
        user_id: UserId,
        project_id: ProjectId,
    ) -> DomainResult<Vec<TimeLog>> {
        if self.failing_project == Some(project_id) {
            return Err(DaylogError::Database("connection reset".into()));
        }

        let mut logs: Vec<_> = self
            .logs
            .lock()
            .unwrap()
            .iter()
            .filter(|log| log.project_id == project_id && log.user_id == user_id)
            .cloned()
            .collect();
        logs.sort_by_key(|log| log.start_time);
        Ok(logs)
    }

    async fn insert_log(&self, log: NewTimeLog) -> DomainResult<TimeLog> {
        let mut logs = self.logs.lock().unwrap();
        let id = logs.iter().map(|l| l.id).max().unwrap_or(0) + 1;
        let created = TimeLog {
            id,
            project_id: log.project_id,
            user_id: log.user_id,
            start_time: log.start_time,
            end_time: log.end_time,
            format_min: log.format_min,
            format_sec: log.format_sec,
        };
        logs.push(created.clone());
        Ok(created)
    }

    async fn close_log(
        &self,
        user_id: UserId,
        log_id: LogId,
        end_time: DateTime<Utc>,
    ) -> DomainResult<()> {
        let mut logs = self.logs.lock().unwrap();
        let log = logs
            .iter_mut()
            .find(|log| log.id == log_id && log.user_id == user_id && log.is_open())
            .ok_or_else(|| DaylogError::NotFound(format!("log {log_id}")))?;
        log.end_time = Some(end_time);
        Ok(())
    }
}
