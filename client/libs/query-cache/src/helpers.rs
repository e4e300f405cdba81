//! Helper functions for cache key management
//!
//! Key format: `v{VERSION}:{entity}:{identifier}`. All callers must build
//! keys through these helpers so one version bump invalidates every consumer.

use crate::{CacheError, Result, CACHE_VERSION};

/// Build a cache key from an entity type and ID
///
/// # Example
///
/// ```
/// use query_cache::build_cache_key;
///
/// let key = build_cache_key("comments", "post-42");
/// assert_eq!(key, "v1:comments:post-42");
/// ```
pub fn build_cache_key(entity: &str, id: &str) -> String {
    format!("v{}:{}:{}", CACHE_VERSION, entity, id)
}

/// Parse a cache key into entity type and ID
///
/// # Example
///
/// ```
/// use query_cache::parse_cache_key;
///
/// let (entity, id) = parse_cache_key("v1:comments:post-42").unwrap();
/// assert_eq!(entity, "comments");
/// assert_eq!(id, "post-42");
/// ```
pub fn parse_cache_key(key: &str) -> Result<(String, String)> {
    let parts: Vec<&str> = key.splitn(3, ':').collect();

    if parts.len() != 3 || !parts[0].starts_with('v') {
        return Err(CacheError::InvalidKey(format!(
            "{}. Expected format: v<version>:<entity>:<id>",
            key
        )));
    }

    Ok((parts[1].to_string(), parts[2].to_string()))
}
