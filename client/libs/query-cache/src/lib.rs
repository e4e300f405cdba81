//! Query cache collaborator interface
//!
//! A small caching seam for client-side query results, keyed by a versioned
//! key schema. Consumers read through the cache and explicitly invalidate the
//! affected key after a successful write, instead of relying on an ambient
//! process-wide cache.
//!
//! ```text
//! Consumer (comments-core):
//!   1. GET v1:comments:{post_id}        -> hit: decode, done
//!   2. miss: fetch from the store, PUT v1:comments:{post_id}
//!   3. after a successful create: INVALIDATE v1:comments:{post_id}
//! ```
//!
//! # Example
//!
//! ```
//! use query_cache::{build_cache_key, InMemoryQueryCache, QueryCache};
//!
//! # tokio_test::block_on(async {
//! let cache = InMemoryQueryCache::new();
//! let key = build_cache_key("comments", "post-1");
//!
//! cache.put(&key, serde_json::json!(["a", "b"]), 300).await.unwrap();
//! assert!(cache.get(&key).await.unwrap().is_some());
//!
//! cache.invalidate(&key).await.unwrap();
//! assert!(cache.get(&key).await.unwrap().is_none());
//! # });
//! ```

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use serde_json::Value;
use tracing::debug;

mod error;
mod helpers;

pub use error::CacheError;
pub use helpers::{build_cache_key, parse_cache_key};

pub type Result<T> = std::result::Result<T, CacheError>;

/// Cache schema version - increment when changing key formats
pub const CACHE_VERSION: u32 = 1;

/// Object-safe cache operations over JSON payloads
///
/// Implementations must be cheap to clone behind an `Arc` and safe to share
/// across tasks. A failing cache must never take the consumer down with it;
/// callers are expected to degrade to their source of truth.
#[async_trait::async_trait]
pub trait QueryCache: Send + Sync {
    /// Get a cached value, or `None` on miss
    async fn get(&self, key: &str) -> Result<Option<Value>>;

    /// Store a value with a TTL in seconds (0 = no expiry)
    async fn put(&self, key: &str, value: Value, ttl_secs: u64) -> Result<()>;

    /// Remove a key; returns whether it was present
    async fn invalidate(&self, key: &str) -> Result<bool>;
}

struct CacheEntry {
    value: Value,
    expires_at: Option<DateTime<Utc>>,
}

impl CacheEntry {
    fn is_expired(&self, now: DateTime<Utc>) -> bool {
        matches!(self.expires_at, Some(deadline) if deadline <= now)
    }
}

/// In-process cache backed by a concurrent map with lazy expiry
///
/// Expired entries are evicted on access, not by a background sweeper; the
/// working set here is one entry per viewed post, so unbounded growth is not
/// a concern at client scale.
#[derive(Default)]
pub struct InMemoryQueryCache {
    entries: DashMap<String, CacheEntry>,
}

impl InMemoryQueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    fn force_expire(&self, key: &str) {
        if let Some(mut entry) = self.entries.get_mut(key) {
            entry.expires_at = Some(Utc::now() - Duration::seconds(1));
        }
    }
}

#[async_trait::async_trait]
impl QueryCache for InMemoryQueryCache {
    async fn get(&self, key: &str) -> Result<Option<Value>> {
        let expired = match self.entries.get(key) {
            Some(entry) => {
                if !entry.is_expired(Utc::now()) {
                    debug!(key, "cache hit");
                    return Ok(Some(entry.value.clone()));
                }
                true
            }
            None => false,
        };

        if expired {
            self.entries.remove(key);
        }
        debug!(key, expired, "cache miss");
        Ok(None)
    }

    async fn put(&self, key: &str, value: Value, ttl_secs: u64) -> Result<()> {
        let expires_at = match ttl_secs {
            0 => None,
            secs => Some(Utc::now() + Duration::seconds(secs as i64)),
        };

        self.entries
            .insert(key.to_string(), CacheEntry { value, expires_at });
        debug!(key, ttl_secs, "cache put");
        Ok(())
    }

    async fn invalidate(&self, key: &str) -> Result<bool> {
        let removed = self.entries.remove(key).is_some();
        debug!(key, removed, "cache invalidate");
        Ok(removed)
    }
}
