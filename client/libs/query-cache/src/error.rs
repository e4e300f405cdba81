//! Error types for query-cache operations

use thiserror::Error;

/// Query cache errors
#[derive(Error, Debug)]
pub enum CacheError {
    /// Payload serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Malformed cache key
    #[error("Invalid cache key: {0}")]
    InvalidKey(String),

    /// Cache backend failure
    #[error("Cache backend error: {0}")]
    Backend(String),
}

// Note: anyhow::Error already has a blanket From implementation for all std::error::Error types
// So CacheError is automatically convertible to anyhow::Error via the thiserror derive

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CacheError::InvalidKey("no-prefix".to_string());
        assert_eq!(err.to_string(), "Invalid cache key: no-prefix");

        let err = CacheError::Backend("connection refused".to_string());
        assert_eq!(err.to_string(), "Cache backend error: connection refused");
    }

    #[test]
    fn test_error_from_serde() {
        let json_err = serde_json::from_str::<String>("not json");
        assert!(json_err.is_err());

        let err: CacheError = json_err.unwrap_err().into();
        assert!(matches!(err, CacheError::Serialization(_)));
    }
}
