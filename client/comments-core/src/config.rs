/// Configuration management for the comment engine
///
/// Loaded from environment variables with sensible defaults, so an embedding
/// client can run with zero configuration.
use serde::{Deserialize, Serialize};

/// Comment engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentsConfig {
    /// Maximum accepted comment length (after trimming), in characters
    pub max_content_len: usize,
    /// TTL for cached per-post comment lists, in seconds
    pub cache_ttl_secs: u64,
}

impl CommentsConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        CommentsConfig {
            max_content_len: std::env::var("COMMENTS_MAX_CONTENT_LEN")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_max_content_len),
            cache_ttl_secs: std::env::var("COMMENTS_CACHE_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_cache_ttl_secs),
        }
    }
}

impl Default for CommentsConfig {
    fn default() -> Self {
        CommentsConfig {
            max_content_len: default_max_content_len(),
            cache_ttl_secs: default_cache_ttl_secs(),
        }
    }
}

fn default_max_content_len() -> usize {
    2_000
}

fn default_cache_ttl_secs() -> u64 {
    300
}
