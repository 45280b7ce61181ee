//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with age tracking.

use std::time::Duration;

use tokio::time::Instant;

// == Cache Entry ==
/// Represents a single cached payload with its creation time.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored payload
    pub payload: Vec<u8>,
    /// When the entry was written
    pub created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry stamped with the current time.
    pub fn new(payload: Vec<u8>) -> Self {
        Self {
            payload,
            created_at: Instant::now(),
        }
    }

    // == Age ==
    /// Time elapsed since the entry was written.
    pub fn age(&self) -> Duration {
        Instant::now().saturating_duration_since(self.created_at)
    }

    // == Is Expired ==
    /// Checks if the entry has outlived the given TTL.
    ///
    /// Boundary condition: an entry whose age equals the TTL is still valid;
    /// it only expires once its age strictly exceeds the TTL.
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.age() > ttl
    }
}
