//! Cache Builder
//!
//! Configuration step that validates capacity and eviction policy before a
//! cache is created.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::info;

use crate::cache::{FifoCache, SharedCache};
use crate::config::Config;
use crate::error::{CacheError, Result};

// == Eviction Policy ==
/// Eviction policies a cache can be built with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum EvictionPolicy {
    /// Evict the entry inserted earliest
    #[default]
    #[serde(rename = "FIFO")]
    Fifo,
}

impl EvictionPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            EvictionPolicy::Fifo => "FIFO",
        }
    }
}

impl fmt::Display for EvictionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EvictionPolicy {
    type Err = CacheError;

    /// Parses a policy name, ignoring ASCII case. Surrounding whitespace is
    /// not accepted.
    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("fifo") {
            Ok(EvictionPolicy::Fifo)
        } else {
            Err(CacheError::invalid_config(format!(
                "unsupported eviction policy '{}'",
                s
            )))
        }
    }
}

// == Cache Builder ==
/// Builder for [`FifoCache`] and [`SharedCache`].
///
/// # Example
/// ```
/// use fifo_cache::{CacheBuilder, EvictionPolicy};
///
/// let mut cache = CacheBuilder::new()
///     .capacity(3)
///     .eviction_policy(EvictionPolicy::Fifo)
///     .build()
///     .unwrap();
/// cache.put("a", 1);
/// assert_eq!(cache.get("a"), Some(1));
/// ```
#[derive(Debug, Clone, Default)]
pub struct CacheBuilder {
    capacity: Option<usize>,
    policy: Option<Result<EvictionPolicy>>,
}

impl CacheBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the builder from loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new()
            .capacity(config.capacity)
            .eviction_policy(config.eviction_policy)
    }

    /// Sets the maximum number of entries.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Sets the eviction policy. Defaults to FIFO when never called.
    pub fn eviction_policy(mut self, policy: EvictionPolicy) -> Self {
        self.policy = Some(Ok(policy));
        self
    }

    /// Sets the eviction policy by name.
    ///
    /// An unknown name is reported by [`build`](Self::build).
    pub fn eviction_policy_name(mut self, name: &str) -> Self {
        self.policy = Some(name.parse());
        self
    }

    // == Build ==
    /// Validates the configuration and creates the cache.
    ///
    /// # Errors
    /// `CacheError::InvalidConfiguration` if capacity is missing or zero, or
    /// the eviction policy name was not recognized.
    pub fn build(self) -> Result<FifoCache> {
        let policy = self.policy.unwrap_or(Ok(EvictionPolicy::Fifo))?;
        let capacity = self
            .capacity
            .ok_or_else(|| CacheError::invalid_config("capacity was not set"))?;

        let cache = match policy {
            EvictionPolicy::Fifo => FifoCache::new(capacity)?,
        };

        info!(capacity, policy = %policy, "Cache built");
        Ok(cache)
    }

    /// Same as [`build`](Self::build), wrapped for concurrent use.
    pub fn build_shared(self) -> Result<SharedCache> {
        self.build().map(SharedCache::from)
    }
}
