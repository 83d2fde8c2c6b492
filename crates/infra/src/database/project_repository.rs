//! Project repository implementation using SQLite

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use daylog_core::ProjectRepository as ProjectRepositoryPort;
use daylog_domain::{NewProject, Project, ProjectId, Result as DomainResult, UserId};
use rusqlite::{params, OptionalExtension, Row};
use tracing::debug;

use super::manager::{map_error, run_blocking, DbManager};
use super::timestamps::{from_unix, to_unix};

/// SQLite-backed implementation of `ProjectRepository`
pub struct SqliteProjectRepository {
    db: Arc<DbManager>,
}

impl SqliteProjectRepository {
    /// Create a new repository instance
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProjectRepositoryPort for SqliteProjectRepository {
    async fn list_projects(&self, user_id: UserId) -> DomainResult<Vec<Project>> {
        run_blocking(&self.db, move |conn| {
            let mut stmt = conn
                .prepare(
                    "SELECT id, title, owner_id, date_created
                     FROM projects
                     WHERE owner_id = ?1
                     ORDER BY id ASC",
                )
                .map_err(map_error)?;

            let projects = stmt
                .query_map(params![user_id], map_project_row)
                .map_err(map_error)?
                .collect::<rusqlite::Result<Vec<_>>>()
                .map_err(map_error)?;

            Ok(projects)
        })
        .await
    }

    async fn get_project(
        &self,
        user_id: UserId,
        project_id: ProjectId,
    ) -> DomainResult<Option<Project>> {
        run_blocking(&self.db, move |conn| {
            conn.query_row(
                "SELECT id, title, owner_id, date_created
                 FROM projects
                 WHERE id = ?1 AND owner_id = ?2",
                params![project_id, user_id],
                map_project_row,
            )
            .optional()
            .map_err(map_error)
        })
        .await
    }

    async fn insert_project(&self, project: NewProject) -> DomainResult<Project> {
        run_blocking(&self.db, move |conn| {
            let date_created = Utc::now();
            conn.execute(
                "INSERT INTO projects (title, owner_id, date_created) VALUES (?1, ?2, ?3)",
                params![project.title, project.owner_id, to_unix(date_created)],
            )
            .map_err(map_error)?;

            let id = conn.last_insert_rowid();
            debug!(project_id = id, owner_id = project.owner_id, "project created");

            // Stored with second precision.
            let date_created = from_unix(to_unix(date_created), 3).map_err(map_error)?;
            Ok(Project { id, title: project.title, owner_id: project.owner_id, date_created })
        })
        .await
    }
}

/// Map a row to a Project
fn map_project_row(row: &Row<'_>) -> rusqlite::Result<Project> {
    Ok(Project {
        id: row.get(0)?,
        title: row.get(1)?,
        owner_id: row.get(2)?,
        date_created: from_unix(row.get(3)?, 3)?,
    })
}
