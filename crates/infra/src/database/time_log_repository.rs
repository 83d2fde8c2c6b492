//! Time log repository implementation using SQLite

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use daylog_core::TimeLogRepository as TimeLogRepositoryPort;
use daylog_domain::{
    DaylogError, LogId, NewTimeLog, ProjectId, Result as DomainResult, TimeLog, UserId,
};
use rusqlite::{params, Row};
use tracing::debug;

use super::manager::{map_error, run_blocking, DbManager};
use super::timestamps::{from_unix, to_unix};

/// SQLite-backed implementation of `TimeLogRepository`
pub struct SqliteTimeLogRepository {
    db: Arc<DbManager>,
}

impl SqliteTimeLogRepository {
    /// Create a new repository instance
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TimeLogRepositoryPort for SqliteTimeLogRepository {
    async fn logs_for_project(
        &self,
        user_id: UserId,
        project_id: ProjectId,
    ) -> DomainResult<Vec<TimeLog>> {
        run_blocking(&self.db, move |conn| {
            let mut stmt = conn
                .prepare(
                    "SELECT id, project_id, user_id, start_time, end_time, format_min, format_sec
                     FROM logs
                     WHERE project_id = ?1 AND user_id = ?2
                     ORDER BY start_time ASC, id ASC",
                )
                .map_err(map_error)?;

            let logs = stmt
                .query_map(params![project_id, user_id], map_log_row)
                .map_err(map_error)?
                .collect::<rusqlite::Result<Vec<_>>>()
                .map_err(map_error)?;

            Ok(logs)
        })
        .await
    }

    async fn insert_log(&self, log: NewTimeLog) -> DomainResult<TimeLog> {
        if let Some(end_time) = log.end_time {
            if end_time < log.start_time {
                return Err(DaylogError::InvalidInput(format!(
                    "log ends at {end_time} before it starts at {}",
                    log.start_time
                )));
            }
        }

        run_blocking(&self.db, move |conn| {
            conn.execute(
                "INSERT INTO logs
                     (project_id, user_id, start_time, end_time, format_min, format_sec)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    log.project_id,
                    log.user_id,
                    to_unix(log.start_time),
                    log.end_time.map(to_unix),
                    log.format_min,
                    log.format_sec,
                ],
            )
            .map_err(map_error)?;

            let id = conn.last_insert_rowid();
            debug!(
                log_id = id,
                project_id = log.project_id,
                open = log.end_time.is_none(),
                "log recorded"
            );

            Ok(TimeLog {
                id,
                project_id: log.project_id,
                user_id: log.user_id,
                start_time: from_unix(to_unix(log.start_time), 3).map_err(map_error)?,
                end_time: log
                    .end_time
                    .map(|end| from_unix(to_unix(end), 4))
                    .transpose()
                    .map_err(map_error)?,
                format_min: log.format_min,
                format_sec: log.format_sec,
            })
        })
        .await
    }

    async fn close_log(
        &self,
        user_id: UserId,
        log_id: LogId,
        end_time: DateTime<Utc>,
    ) -> DomainResult<()> {
        run_blocking(&self.db, move |conn| {
            let updated = conn
                .execute(
                    "UPDATE logs SET end_time = ?1
                     WHERE id = ?2 AND user_id = ?3 AND end_time IS NULL AND start_time <= ?1",
                    params![to_unix(end_time), log_id, user_id],
                )
                .map_err(map_error)?;

            if updated == 0 {
                return Err(DaylogError::NotFound(format!(
                    "no running log {log_id} for user {user_id} that started before {end_time}"
                )));
            }

            debug!(log_id, user_id, "log closed");
            Ok(())
        })
        .await
    }
}

/// Map a row to a TimeLog
fn map_log_row(row: &Row<'_>) -> rusqlite::Result<TimeLog> {
    let end_time: Option<i64> = row.get(4)?;

    Ok(TimeLog {
        id: row.get(0)?,
        project_id: row.get(1)?,
        user_id: row.get(2)?,
        start_time: from_unix(row.get(3)?, 3)?,
        end_time: end_time.map(|secs| from_unix(secs, 4)).transpose()?,
        format_min: row.get(5)?,
        format_sec: row.get(6)?,
    })
}
