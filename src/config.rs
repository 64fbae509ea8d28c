//! Configuration Module
//!
//! Handles loading cache configuration from environment variables.

use std::env;
use std::str::FromStr;

use crate::builder::EvictionPolicy;
use crate::error::{CacheError, Result};

/// Cache configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Maximum number of entries the cache can hold
    pub capacity: usize,
    /// Eviction policy used when the cache is full
    pub eviction_policy: EvictionPolicy,
    /// Interval in seconds between stats reports in the demo binary
    pub stats_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - Maximum cache entries (default: 3)
    /// - `EVICTION_POLICY` - Eviction policy name (default: FIFO)
    /// - `STATS_INTERVAL` - Stats report frequency in seconds (default: 1)
    ///
    /// Unlike unset variables, a set but malformed value is an error.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let capacity: usize = parse_var("CACHE_CAPACITY")?.unwrap_or(defaults.capacity);
        if capacity == 0 {
            return Err(CacheError::invalid_config(
                "CACHE_CAPACITY must be a positive integer",
            ));
        }

        Ok(Self {
            capacity,
            eviction_policy: parse_var("EVICTION_POLICY")?.unwrap_or(defaults.eviction_policy),
            stats_interval: parse_var("STATS_INTERVAL")?.unwrap_or(defaults.stats_interval),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: 3,
            eviction_policy: EvictionPolicy::Fifo,
            stats_interval: 1,
        }
    }
}

/// Reads and parses `name`, returning `None` when it is unset.
fn parse_var<T: FromStr>(name: &str) -> Result<Option<T>> {
    match env::var(name) {
        Ok(raw) => raw.parse().map(Some).map_err(|_| {
            CacheError::invalid_config(format!("{} has invalid value '{}'", name, raw))
        }),
        Err(_) => Ok(None),
    }
}
