//! Expiring Cache Module
//!
//! Owned, lock-guarded handle over a [`CacheStore`] plus the background sweep
//! that evicts entries once they outlive the TTL.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::cache::{CacheStats, CacheStore};
use crate::tasks::spawn_sweep_task;

// == Expiring Cache ==
/// Concurrent URL → payload cache with a TTL-driven sweeper.
///
/// A single coarse lock guards the whole map, so `put`, `get` and the sweep
/// never observe each other's partial work. The sweep runs every `ttl` for as
/// long as the cache lives and is aborted when the cache is dropped.
///
/// Must be constructed inside a tokio runtime.
#[derive(Debug)]
pub struct ExpiringCache {
    store: Arc<RwLock<CacheStore>>,
    sweeper: JoinHandle<()>,
}

impl ExpiringCache {
    // == Constructor ==
    /// Creates an empty cache and starts its sweep task.
    pub fn new(ttl: Duration) -> Self {
        let store = Arc::new(RwLock::new(CacheStore::new(ttl)));
        let sweeper = spawn_sweep_task(store.clone(), ttl);
        Self { store, sweeper }
    }

    // == Put ==
    /// Inserts or overwrites the payload for `key`, resetting its age.
    pub async fn put(&self, key: &str, payload: Vec<u8>) {
        self.store.write().await.put(key, payload);
        debug!(key, "cache put");
    }

    // == Get ==
    /// Returns the payload for `key` if a non-expired entry exists.
    pub async fn get(&self, key: &str) -> Option<Vec<u8>> {
        let payload = self.store.write().await.get(key);
        debug!(key, hit = payload.is_some(), "cache lookup");
        payload
    }

    /// Returns a snapshot of the cache statistics.
    pub async fn stats(&self) -> CacheStats {
        self.store.read().await.stats()
    }

    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }

    pub async fn ttl(&self) -> Duration {
        self.store.read().await.ttl()
    }

    /// Whether the background sweep is still running.
    pub fn is_sweeping(&self) -> bool {
        !self.sweeper.is_finished()
    }

    // == Shutdown ==
    /// Stops the background sweep. Lookups keep honouring the TTL.
    pub fn shutdown(&self) {
        self.sweeper.abort();
    }
}

impl Drop for ExpiringCache {
    fn drop(&mut self) {
        self.sweeper.abort();
    }
}
