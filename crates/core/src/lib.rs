//! # Daylog Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The day-range extractor and merger
//! - Port/adapter interfaces (traits)
//! - The day-range service
//!
//! ## Architecture Principles
//! - Only depends on `daylog-domain`
//! - No database, HTTP, or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod ranges;

// Re-export specific items to avoid ambiguity
pub use ranges::ports::{Clock, ProjectRepository, SystemClock, TimeLogRepository};
pub use ranges::{
    extract_day_ranges, local_day, merge_ranges, most_recent_day, parse_time_zone,
    DayRangeService,
};
