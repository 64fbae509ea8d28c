//! FIFO Cache - A bounded in-memory key/value cache
//!
//! Stores integer values under string keys and evicts the earliest inserted
//! entry once capacity is reached.

pub mod builder;
pub mod cache;
pub mod config;
pub mod error;
pub mod factory;
pub mod tasks;

pub use builder::{CacheBuilder, EvictionPolicy};
pub use cache::{CacheStats, FifoCache, SharedCache};
pub use config::Config;
pub use error::CacheError;
pub use factory::{CacheFactory, FifoCacheFactory};
pub use tasks::spawn_stats_reporter;
