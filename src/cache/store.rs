//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with FIFO tracking.

use std::collections::HashMap;
use std::num::NonZeroUsize;

use tracing::debug;

use crate::cache::{CacheStats, FifoTracker};
use crate::error::{CacheError, Result};

// == FIFO Cache ==
/// Bounded key/value cache with first-in-first-out eviction.
///
/// When a previously unseen key arrives and the cache is full, the key that
/// was inserted earliest is evicted. Overwriting an existing key keeps its
/// original position, and reads never affect eviction order.
#[derive(Debug)]
pub struct FifoCache {
    /// Key-value storage
    entries: HashMap<String, i64>,
    /// Insertion order tracker
    order: FifoTracker,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed
    capacity: NonZeroUsize,
}

impl FifoCache {
    // == Constructor ==
    /// Creates a new FifoCache holding at most `capacity` entries.
    ///
    /// # Errors
    /// Returns `CacheError::InvalidConfiguration` if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        let capacity = NonZeroUsize::new(capacity)
            .ok_or_else(|| CacheError::invalid_config("capacity must be at least 1"))?;
        Ok(Self::with_capacity(capacity))
    }

    /// Creates a new FifoCache from an already validated capacity.
    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        let stats = CacheStats {
            capacity: capacity.get(),
            ..CacheStats::default()
        };
        Self {
            entries: HashMap::with_capacity(capacity.get()),
            order: FifoTracker::with_capacity(capacity.get()),
            stats,
            capacity,
        }
    }

    // == Put ==
    /// Stores a key-value pair.
    ///
    /// If the key already exists, the value is overwritten in place and the
    /// key keeps its eviction position. If the key is new and the cache is at
    /// capacity, the oldest inserted entry is evicted first.
    pub fn put(&mut self, key: impl Into<String>, value: i64) {
        self.insert(key, value);
    }

    // == Insert ==
    /// Same as [`put`](Self::put), but returns the entry evicted to make
    /// room, if any.
    pub fn insert(&mut self, key: impl Into<String>, value: i64) -> Option<(String, i64)> {
        let key = key.into();

        // Overwrite case: value changes, order does not
        if let Some(slot) = self.entries.get_mut(&key) {
            *slot = value;
            self.stats.record_update();
            return None;
        }

        let evicted = if self.entries.len() >= self.capacity.get() {
            self.evict_oldest()
        } else {
            None
        };

        self.entries.insert(key.clone(), value);
        self.order.push(key);
        self.stats.record_insertion();
        self.stats.set_total_entries(self.entries.len());

        debug_assert_eq!(self.entries.len(), self.order.len());
        evicted
    }

    // == Get ==
    /// Retrieves a value by key, or `None` if the key is absent.
    ///
    /// Records a hit or miss. Does not change eviction order.
    pub fn get(&mut self, key: &str) -> Option<i64> {
        match self.entries.get(key) {
            Some(&value) => {
                self.stats.record_hit();
                Some(value)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Peek ==
    /// Retrieves a value without recording statistics.
    pub fn peek(&self, key: &str) -> Option<i64> {
        self.entries.get(key).copied()
    }

    // == Remove ==
    /// Removes an entry by key, returning its value.
    ///
    /// Removing an absent key is a no-op.
    pub fn remove(&mut self, key: &str) -> Option<i64> {
        let value = self.entries.remove(key)?;
        self.order.remove(key);
        self.stats.set_total_entries(self.entries.len());
        Some(value)
    }

    // == Clear ==
    /// Removes every entry. Capacity and counters are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
        self.stats.set_total_entries(0);
    }

    // == Contains Key ==
    /// Returns whether `key` is present. Touches neither order nor stats.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    // == Duplicate ==
    /// Produces an independent copy with the same capacity and contents.
    ///
    /// Both the map and the insertion order are deep-copied, so later
    /// mutations of either cache are invisible to the other. The copy starts
    /// with fresh statistics.
    pub fn duplicate(&self) -> Self {
        let stats = CacheStats {
            capacity: self.capacity.get(),
            total_entries: self.entries.len(),
            ..CacheStats::default()
        };
        Self {
            entries: self.entries.clone(),
            order: self.order.clone(),
            stats,
            capacity: self.capacity,
        }
    }

    // == Peek Oldest ==
    /// Returns the key that the next eviction would remove.
    pub fn peek_oldest(&self) -> Option<&str> {
        self.order.peek_oldest().map(String::as_str)
    }

    // == Keys ==
    /// Iterates keys from oldest to newest insertion.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Capacity ==
    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }

    // == Size ==
    /// Returns the current number of entries in the cache.
    pub fn size(&self) -> usize {
        self.entries.len()
    }

    // == Length ==
    /// Alias of [`size`](Self::size).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn evict_oldest(&mut self) -> Option<(String, i64)> {
        let key = self.order.evict_oldest()?;
        let value = self.entries.remove(&key)?;
        self.stats.record_eviction();
        debug!(key = %key, value, "Evicted oldest entry");
        Some((key, value))
    }
}

impl Clone for FifoCache {
    fn clone(&self) -> Self {
        self.duplicate()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn cache(capacity: usize) -> FifoCache {
        FifoCache::new(capacity).unwrap()
    }

    #[test]
    fn test_store_new() {
        let store = cache(100);
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
        assert_eq!(store.capacity(), 100);
    }

    #[test]
    fn test_store_zero_capacity_rejected() {
        let result = FifoCache::new(0);
        assert!(matches!(result, Err(CacheError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_store_put_and_get() {
        let mut store = cache(100);

        store.put("key1", 1);

        assert_eq!(store.get("key1"), Some(1));
        assert_eq!(store.size(), 1);
    }

    #[test]
    fn test_store_get_nonexistent() {
        let mut store = cache(100);
        assert_eq!(store.get("nonexistent"), None);
    }

    #[test]
    fn test_store_negative_one_is_a_value() {
        let mut store = cache(2);

        store.put("neg", -1);

        assert_eq!(store.get("neg"), Some(-1));
        assert_eq!(store.get("missing"), None);
    }

    #[test]
    fn test_store_remove() {
        let mut store = cache(100);

        store.put("key1", 1);
        assert_eq!(store.remove("key1"), Some(1));

        assert!(store.is_empty());
        assert_eq!(store.get("key1"), None);
        assert_eq!(store.peek_oldest(), None);
    }

    #[test]
    fn test_store_remove_nonexistent() {
        let mut store = cache(100);
        store.put("key1", 1);

        assert_eq!(store.remove("nonexistent"), None);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_overwrite() {
        let mut store = cache(100);

        store.put("key1", 1);
        store.put("key1", 2);

        assert_eq!(store.get("key1"), Some(2));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_fifo_eviction() {
        let mut store = cache(3);

        store.put("key1", 1);
        store.put("key2", 2);
        store.put("key3", 3);

        // Cache is full, adding key4 should evict key1 (oldest)
        let evicted = store.insert("key4", 4);

        assert_eq!(evicted, Some(("key1".to_string(), 1)));
        assert_eq!(store.len(), 3);
        assert_eq!(store.get("key1"), None);
        assert_eq!(store.get("key2"), Some(2));
        assert_eq!(store.get("key3"), Some(3));
        assert_eq!(store.get("key4"), Some(4));
    }

    #[test]
    fn test_store_get_does_not_reorder() {
        let mut store = cache(3);

        store.put("key1", 1);
        store.put("key2", 2);
        store.put("key3", 3);

        // Reading key1 must not protect it
        store.get("key1");
        store.put("key4", 4);

        assert_eq!(store.get("key1"), None);
        assert_eq!(store.get("key2"), Some(2));
    }

    #[test]
    fn test_store_update_does_not_reorder() {
        let mut store = cache(3);

        store.put("key1", 1);
        store.put("key2", 2);
        store.put("key3", 3);

        store.put("key1", 10);
        store.put("key1", 11);
        assert_eq!(store.len(), 3);

        store.put("key4", 4);

        assert!(!store.contains_key("key1"));
        assert_eq!(store.peek_oldest(), Some("key2"));
    }

    #[test]
    fn test_store_capacity_one_update_does_not_evict_self() {
        let mut store = cache(1);

        store.put("x", 1);
        assert_eq!(store.insert("x", 2), None);

        assert_eq!(store.size(), 1);
        assert_eq!(store.get("x"), Some(2));
        assert_eq!(store.stats().evictions, 0);
    }

    #[test]
    fn test_store_walkthrough() {
        let mut store = cache(3);

        store.put("a", 1);
        store.put("b", 2);
        store.put("c", 3);
        assert_eq!(store.get("a"), Some(1));

        store.put("d", 4);
        assert_eq!(store.get("a"), None);
        assert_eq!(store.get("b"), Some(2));
        assert_eq!(store.size(), 3);

        store.remove("b");
        assert_eq!(store.get("b"), None);
        assert_eq!(store.size(), 2);

        store.put("e", 5);
        assert_eq!(store.size(), 3);
        assert_eq!(store.keys().collect::<Vec<_>>(), ["c", "d", "e"]);
    }

    #[test]
    fn test_store_clear() {
        let mut store = cache(3);
        store.put("a", 1);
        store.put("b", 2);

        store.clear();

        assert_eq!(store.size(), 0);
        assert_eq!(store.get("a"), None);
        assert_eq!(store.get("b"), None);
        assert_eq!(store.capacity(), 3);

        // Capacity still enforced after clear
        for (i, key) in ["p", "q", "r", "s"].iter().enumerate() {
            store.put(*key, i as i64);
        }
        assert_eq!(store.size(), 3);
        assert!(!store.contains_key("p"));
    }

    #[test]
    fn test_store_clear_empty_is_noop() {
        let mut store = cache(2);
        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn test_store_contains_key_has_no_side_effects() {
        let mut store = cache(2);
        store.put("a", 1);
        store.put("b", 2);

        assert!(store.contains_key("a"));
        assert!(!store.contains_key("z"));

        let stats = store.stats();
        assert_eq!(stats.hits, 0);
        assert_eq!(stats.misses, 0);
        assert_eq!(store.peek_oldest(), Some("a"));
    }

    #[test]
    fn test_store_duplicate_is_independent() {
        let mut original = cache(3);
        original.put("a", 1);
        original.put("b", 2);

        let mut copy = original.duplicate();
        assert_eq!(copy.capacity(), 3);
        assert_eq!(copy.keys().collect::<Vec<_>>(), ["a", "b"]);

        copy.put("c", 3);
        copy.remove("a");
        copy.put("b", 20);

        assert_eq!(original.size(), 2);
        assert_eq!(original.get("a"), Some(1));
        assert_eq!(original.get("b"), Some(2));
        assert!(!original.contains_key("c"));

        original.clear();
        assert_eq!(copy.get("b"), Some(20));
        assert_eq!(copy.get("c"), Some(3));
    }

    #[test]
    fn test_store_duplicate_keeps_eviction_order() {
        let mut original = cache(2);
        original.put("a", 1);
        original.put("b", 2);

        let mut copy = original.clone();
        copy.put("c", 3);

        assert!(!copy.contains_key("a"));
        assert!(original.contains_key("a"));
    }

    #[test]
    fn test_store_stats() {
        let mut store = cache(2);

        store.put("key1", 1);
        store.put("key1", 2);
        store.put("key2", 2);
        store.put("key3", 3);
        store.get("key3"); // hit
        store.get("key1"); // miss

        let stats = store.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.insertions, 3);
        assert_eq!(stats.updates, 1);
        assert_eq!(stats.evictions, 1);
        assert_eq!(stats.total_entries, 2);
        assert_eq!(stats.capacity, 2);
    }

    #[test]
    fn test_store_peek_skips_stats() {
        let mut store = cache(2);
        store.put("a", 7);

        assert_eq!(store.peek("a"), Some(7));
        assert_eq!(store.peek("b"), None);
        assert_eq!(store.stats().hits, 0);
        assert_eq!(store.stats().misses, 0);
    }
}
