//! Read-Through Module
//!
//! Cache-or-fetch resolution shared by every command that talks to the API.

use std::future::Future;

use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

use crate::cache::ExpiringCache;
use crate::error::Result;

/// Resolves `key` from the cache, falling back to `fetch` on a miss.
///
/// A hit is decoded from the stored JSON bytes; malformed bytes surface as a
/// `Decode` error. On a miss the fetched value is serialized and stored under
/// `key` before being returned. Failing to serialize only skips the cache
/// write; the caller still gets the value.
pub async fn get_or_fetch<T, F, Fut>(cache: &ExpiringCache, key: &str, fetch: F) -> Result<T>
where
    T: Serialize + DeserializeOwned,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    if let Some(payload) = cache.get(key).await {
        debug!(key, "serving from cache");
        return Ok(serde_json::from_slice(&payload)?);
    }

    let value = fetch().await?;

    match serde_json::to_vec(&value) {
        Ok(payload) => cache.put(key, payload).await,
        Err(err) => warn!(key, error = %err, "Skipping cache write: response could not be serialized"),
    }

    Ok(value)
}
