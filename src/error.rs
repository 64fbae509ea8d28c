//! Error types for the cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache.
///
/// Lookups on absent keys are not errors; `get` returns `None` for those.
/// The only failure mode is configuring a cache that cannot exist.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Capacity, eviction policy or environment value rejected at construction
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl CacheError {
    /// Shorthand for building an `InvalidConfiguration` error.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        CacheError::InvalidConfiguration(msg.into())
    }
}

// == Result Type Alias ==
/// Convenience Result type for the cache.
pub type Result<T> = std::result::Result<T, CacheError>;
