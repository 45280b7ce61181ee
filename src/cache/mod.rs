//! Cache Module
//!
//! Provides the in-memory response cache: TTL-aged byte payloads keyed by the
//! URL they were fetched from, a background sweep, and read-through helpers.

mod entry;
mod expiring;
mod read_through;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use expiring::ExpiringCache;
pub use read_through::get_or_fetch;
pub use stats::CacheStats;
pub use store::CacheStore;
