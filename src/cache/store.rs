//! Cache Store Module
//!
//! Synchronous cache engine: a HashMap of byte payloads aged against one TTL.
//! Locking lives in [`ExpiringCache`](super::ExpiringCache); everything here
//! assumes exclusive access.

use std::collections::HashMap;
use std::time::Duration;

use crate::cache::{CacheEntry, CacheStats};

// == Cache Store ==
/// Main cache storage with TTL-based expiry and no size bound.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum age of a returned entry
    ttl: Duration,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty CacheStore whose entries live for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            ttl,
        }
    }

    /// The TTL every entry is aged against.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // == Put ==
    /// Stores a payload under `key`.
    ///
    /// Overwriting an existing key resets its age to zero.
    pub fn put(&mut self, key: impl Into<String>, payload: Vec<u8>) {
        self.entries.insert(key.into(), CacheEntry::new(payload));
        self.stats.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Retrieves a payload by key.
    ///
    /// An entry older than the TTL is never returned, even if the sweep has
    /// not reached it yet; it is dropped on the spot and counted as a miss.
    pub fn get(&mut self, key: &str) -> Option<Vec<u8>> {
        let Some(entry) = self.entries.get(key) else {
            self.stats.record_miss();
            return None;
        };

        if entry.is_expired(self.ttl) {
            self.entries.remove(key);
            self.stats.set_total_entries(self.entries.len());
            self.stats.record_stale_read();
            return None;
        }

        self.stats.record_hit();
        Some(entry.payload.clone())
    }

    // == Sweep Expired ==
    /// Removes all entries older than the TTL.
    ///
    /// Returns the number of entries removed.
    pub fn sweep_expired(&mut self) -> usize {
        let ttl = self.ttl;
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired(ttl));

        let removed = before - self.entries.len();
        self.stats.record_swept(removed);
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    /// Returns the current number of entries, stale ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
