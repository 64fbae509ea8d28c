//! Cache Factories
//!
//! Named creation calls for callers that should not know how a cache is
//! configured.

use crate::builder::{CacheBuilder, EvictionPolicy};
use crate::cache::FifoCache;
use crate::error::Result;

/// Creates caches on demand.
pub trait CacheFactory {
    /// The cache type produced by this factory.
    type Cache;

    /// Creates a new, empty cache. Every call returns a distinct instance.
    fn create_cache(&self) -> Result<Self::Cache>;
}

// == FIFO Cache Factory ==
/// Factory producing [`FifoCache`] instances of a fixed capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FifoCacheFactory {
    capacity: usize,
}

impl FifoCacheFactory {
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl CacheFactory for FifoCacheFactory {
    type Cache = FifoCache;

    fn create_cache(&self) -> Result<FifoCache> {
        CacheBuilder::new()
            .capacity(self.capacity)
            .eviction_policy(EvictionPolicy::Fifo)
            .build()
    }
}
