//! Mapping of SQLite, pool and task failures onto [`DaylogError`].

use daylog_domain::DaylogError;
use rusqlite::ffi::ErrorCode;
use tokio::task::JoinError;

/// Extended result code for `FOREIGN KEY constraint failed`.
const SQLITE_CONSTRAINT_FOREIGNKEY: i32 = 787;

/// Infrastructure-side wrapper so foreign error types can be converted with
/// `?` without the domain crate knowing about them.
#[derive(Debug)]
pub struct InfraError(pub DaylogError);

impl From<InfraError> for DaylogError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<DaylogError> for InfraError {
    fn from(value: DaylogError) -> Self {
        Self(value)
    }
}

impl From<rusqlite::Error> for InfraError {
    fn from(value: rusqlite::Error) -> Self {
        let mapped = match value {
            rusqlite::Error::SqliteFailure(failure, detail) => match failure.code {
                ErrorCode::DatabaseBusy | ErrorCode::DatabaseLocked => {
                    DaylogError::Database(format!("sqlite contention: {failure}"))
                }
                ErrorCode::ConstraintViolation
                    if failure.extended_code == SQLITE_CONSTRAINT_FOREIGNKEY =>
                {
                    DaylogError::InvalidInput("referenced project does not exist".into())
                }
                _ => DaylogError::Database(detail.unwrap_or_else(|| failure.to_string())),
            },
            rusqlite::Error::QueryReturnedNoRows => DaylogError::NotFound("no matching row".into()),
            rusqlite::Error::IntegralValueOutOfRange(column, value) => {
                DaylogError::Database(format!("column {column} holds out-of-range value {value}"))
            }
            rusqlite::Error::FromSqlConversionFailure(column, _, cause) => {
                DaylogError::Database(format!("column {column} could not be decoded: {cause}"))
            }
            other => DaylogError::Database(other.to_string()),
        };
        Self(mapped)
    }
}

impl From<r2d2::Error> for InfraError {
    fn from(value: r2d2::Error) -> Self {
        Self(DaylogError::Database(format!("connection pool: {value}")))
    }
}

impl From<JoinError> for InfraError {
    fn from(value: JoinError) -> Self {
        Self(DaylogError::Internal(format!("blocking database task failed: {value}")))
    }
}
