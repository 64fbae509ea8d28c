//! Cache Module
//!
//! Provides a bounded in-memory cache with FIFO eviction.

mod fifo;
mod shared;
mod stats;
mod store;


// Re-export public types
pub use fifo::FifoTracker;
pub use shared::SharedCache;
pub use stats::CacheStats;
pub use store::FifoCache;
