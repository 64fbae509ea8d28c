//! Shared Cache Module
//!
//! Thread-safe handle around a single [`FifoCache`].

use std::sync::Arc;

use parking_lot::Mutex;

use crate::cache::{CacheStats, FifoCache};

// == Shared Cache ==
/// Thread-safe handle to a [`FifoCache`].
///
/// The map and the insertion order live behind one mutex, so every operation
/// observes them consistently. Cloning the handle shares the same cache; use
/// [`duplicate`](Self::duplicate) for an independent copy.
///
/// To give many consumers one process-wide cache, construct a single handle
/// and pass clones of it to each of them.
#[derive(Debug, Clone)]
pub struct SharedCache {
    inner: Arc<Mutex<FifoCache>>,
}

impl SharedCache {
    /// Wraps an existing cache.
    pub fn new(cache: FifoCache) -> Self {
        Self {
            inner: Arc::new(Mutex::new(cache)),
        }
    }

    pub fn put(&self, key: impl Into<String>, value: i64) {
        self.inner.lock().put(key, value);
    }

    /// Stores a key-value pair and returns the evicted entry, if any.
    pub fn insert(&self, key: impl Into<String>, value: i64) -> Option<(String, i64)> {
        self.inner.lock().insert(key, value)
    }

    pub fn get(&self, key: &str) -> Option<i64> {
        self.inner.lock().get(key)
    }

    pub fn remove(&self, key: &str) -> Option<i64> {
        self.inner.lock().remove(key)
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    pub fn size(&self) -> usize {
        self.inner.lock().size()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.lock().contains_key(key)
    }

    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        self.inner.lock().stats()
    }

    /// Returns the keys from oldest to newest, captured under one lock.
    pub fn keys(&self) -> Vec<String> {
        self.inner.lock().keys().map(str::to_owned).collect()
    }

    // == Duplicate ==
    /// Creates a new handle over an independent deep copy of the cache.
    pub fn duplicate(&self) -> Self {
        let copy = self.inner.lock().duplicate();
        Self::new(copy)
    }

    /// Copies the current contents out into an unshared cache.
    pub fn snapshot(&self) -> FifoCache {
        self.inner.lock().duplicate()
    }

    /// Runs `f` with exclusive access to the underlying cache.
    ///
    /// Useful for compound operations that must not interleave with other
    /// callers.
    pub fn with<R>(&self, f: impl FnOnce(&mut FifoCache) -> R) -> R {
        let mut guard = self.inner.lock();
        f(&mut *guard)
    }
}

impl From<FifoCache> for SharedCache {
    fn from(cache: FifoCache) -> Self {
        Self::new(cache)
    }
}
