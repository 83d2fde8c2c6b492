//! # Daylog Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - Database implementations (SQLite through an r2d2 pool)
//! - Configuration loading (environment, TOML, JSON)
//! - Tracing subscriber setup
//!
//! ## Architecture
//! - Implements traits defined in `daylog-core`
//! - Depends on `daylog-domain` and `daylog-core`
//! - Contains all "impure" code (I/O, environment, global subscriber)

pub mod config;
pub mod context;
pub mod database;
pub mod errors;
pub mod observability;

// Re-export commonly used items
pub use context::AppContext;
pub use database::*;
pub use errors::InfraError;
pub use observability::init_tracing;
