//! FIFO Tracker Module
//!
//! Records insertion order for FIFO eviction.

use std::collections::VecDeque;

// == FIFO Tracker ==
/// Tracks insertion order for the FIFO eviction strategy.
///
/// Keys are stored in a VecDeque where:
/// - Front = Oldest inserted (next eviction candidate)
/// - Back = Newest inserted
///
/// Reads and value updates never reorder keys.
#[derive(Debug, Default, Clone)]
pub struct FifoTracker {
    /// Keys in insertion order
    order: VecDeque<String>,
}

impl FifoTracker {
    // == Constructor ==
    /// Creates a new empty FIFO tracker.
    pub fn new() -> Self {
        Self {
            order: VecDeque::new(),
        }
    }

    /// Creates a tracker with room for `capacity` keys.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            order: VecDeque::with_capacity(capacity),
        }
    }

    // == Push ==
    /// Appends a newly inserted key to the back of the queue.
    ///
    /// The caller guarantees the key is not already tracked.
    pub fn push(&mut self, key: String) {
        self.order.push_back(key);
    }

    // == Remove ==
    /// Removes a key from the tracker, returning whether it was present.
    pub fn remove(&mut self, key: &str) -> bool {
        match self.order.iter().position(|k| k == key) {
            Some(index) => {
                self.order.remove(index);
                true
            }
            None => false,
        }
    }

    // == Evict Oldest ==
    /// Returns and removes the oldest inserted key.
    ///
    /// Returns None if tracker is empty.
    pub fn evict_oldest(&mut self) -> Option<String> {
        self.order.pop_front()
    }

    // == Peek Oldest ==
    /// Returns the oldest inserted key without removing it.
    pub fn peek_oldest(&self) -> Option<&String> {
        self.order.front()
    }

    // == Length ==
    /// Returns the number of tracked keys.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    // == Contains ==
    /// Checks if a key is being tracked.
    #[cfg(test)]
    pub fn contains(&self, key: &str) -> bool {
        self.order.iter().any(|k| k == key)
    }

    // == Clear ==
    pub fn clear(&mut self) {
        self.order.clear();
    }

    // == Iter ==
    /// Iterates keys from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.order.iter()
    }
}
