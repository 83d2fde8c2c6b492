//! Application context - wires the SQLite adapters into the core service

use std::sync::Arc;

use daylog_core::{DayRangeService, ProjectRepository, TimeLogRepository};
use daylog_domain::{Config, Result};
use tracing::info;

use crate::database::{DbManager, SqliteProjectRepository, SqliteTimeLogRepository};

/// Application context - holds the database and the services built on it
pub struct AppContext {
    pub config: Config,
    pub db: Arc<DbManager>,
    pub projects: Arc<dyn ProjectRepository>,
    pub logs: Arc<dyn TimeLogRepository>,
    pub day_ranges: Arc<DayRangeService>,
}

impl AppContext {
    /// Load configuration from the environment (or a config file) and build
    /// the context from it
    pub fn new() -> Result<Self> {
        Self::new_with_config(crate::config::load()?)
    }

    /// Build the context from an explicit configuration
    ///
    /// Opens the pool described by `config.database` and runs migrations
    /// before any repository is handed out.
    pub fn new_with_config(config: Config) -> Result<Self> {
        let db = Arc::new(DbManager::from_config(&config.database)?);
        db.run_migrations()?;

        let projects: Arc<dyn ProjectRepository> =
            Arc::new(SqliteProjectRepository::new(Arc::clone(&db)));
        let logs: Arc<dyn TimeLogRepository> =
            Arc::new(SqliteTimeLogRepository::new(Arc::clone(&db)));

        let day_ranges = Arc::new(
            DayRangeService::new(Arc::clone(&projects), Arc::clone(&logs))
                .with_default_time_zone(config.ranges.default_time_zone.clone()),
        );

        info!(
            db_path = %config.database.path,
            default_time_zone = config.ranges.default_time_zone.as_deref().unwrap_or("none"),
            "application context ready"
        );

        Ok(Self { config, db, projects, logs, day_ranges })
    }
}
