//! TTL Sweep Task
//!
//! Background task that periodically removes expired cache entries.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Spawns a background task that periodically sweeps expired cache entries.
///
/// The task runs in an infinite loop, sleeping for `interval` between sweeps.
/// Ages are computed while the write lock is held, so a `put` that lands
/// between two sweeps is always seen with its fresh timestamp.
///
/// # Arguments
/// * `cache` - Shared reference to the cache store
/// * `interval` - Time between sweeps, normally the cache TTL
///
/// # Returns
/// A JoinHandle for the spawned task; aborting it stops the sweep.
///
/// # Example
/// ```ignore
/// let store = Arc::new(RwLock::new(CacheStore::new(Duration::from_secs(5))));
/// let sweeper = spawn_sweep_task(store.clone(), Duration::from_secs(5));
/// // Later, when the cache is torn down:
/// sweeper.abort();
/// ```
pub fn spawn_sweep_task(cache: Arc<RwLock<CacheStore>>, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!("Starting cache sweep task with interval of {:?}", interval);

        loop {
            tokio::time::sleep(interval).await;

            let (removed, remaining) = {
                let mut cache_guard = cache.write().await;
                let removed = cache_guard.sweep_expired();
                (removed, cache_guard.len())
            };

            if removed > 0 {
                info!(removed, remaining, "Cache sweep removed expired entries");
            } else {
                debug!(remaining, "Cache sweep: no expired entries found");
            }
        }
    })
}
