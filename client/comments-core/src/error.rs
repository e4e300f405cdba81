/// Error types for the comment engine
///
/// Validation and authentication failures are local: they are raised before
/// any store call happens and the UI is expected to prevent them rather than
/// report them. Store and cache failures carry the collaborator's error.
use thiserror::Error;

use crate::store::StoreError;

/// Result type for comment engine operations
pub type Result<T> = std::result::Result<T, CommentError>;

/// Comment engine error types
#[derive(Error, Debug)]
pub enum CommentError {
    /// Input rejected before reaching the store
    #[error("Validation error: {0}")]
    Validation(String),

    /// No authenticated identity available
    #[error("Not signed in")]
    NotAuthenticated,

    /// Comment store operation failed
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Query cache operation failed
    #[error("Cache error: {0}")]
    Cache(#[from] query_cache::CacheError),

    /// Payload serialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CommentError {
    /// Whether the error was raised locally, without a store call
    pub fn is_local(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::NotAuthenticated)
    }

    /// Whether resubmitting the same input could succeed
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Store(_) | Self::Cache(_))
    }
}
