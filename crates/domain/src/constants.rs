//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Day-range extraction
/// Days appended to a log's end day so that a range ending "today" touches a
/// range starting "tomorrow".
pub const END_DAY_BUFFER_DAYS: u64 = 1;

// Wire format
/// Rendering of a calendar day as midnight UTC with millisecond precision.
pub const DAY_ISO_FORMAT: &str = "%Y-%m-%dT00:00:00.000Z";

// Configuration defaults
pub const DEFAULT_DB_PATH: &str = "daylog.db";
pub const DEFAULT_DB_POOL_SIZE: u32 = 4;
pub const DEFAULT_LOG_LEVEL: &str = "info";
