//! Background Tasks Module
//!
//! Contains background tasks that run alongside cache consumers.
//!
//! # Tasks
//! - Stats reporter: logs cache counters at configured intervals

mod report;

pub use report::spawn_stats_reporter;
