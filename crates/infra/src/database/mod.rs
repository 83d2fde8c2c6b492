//! Database implementations

pub mod manager;
pub mod project_repository;
pub mod time_log_repository;
mod timestamps;

pub use manager::*;
pub use project_repository::*;
pub use time_log_repository::*;
