//! Per-project day ranges
//!
//! Time logs → local calendar days → grouped ranges → merged ranges.

pub mod extractor;
pub mod merger;
pub mod ports;
pub mod service;
pub mod timezone;

pub use extractor::{extract_day_ranges, local_day};
pub use merger::{merge_ranges, most_recent_day};
pub use service::DayRangeService;
pub use timezone::parse_time_zone;
