/// Comment store contract
///
/// The persistence backend (local, remote, or a hybrid of the two) lives
/// outside this crate; the engine depends only on this fetch/create contract.
/// Both operations are async and may suspend the caller without blocking
/// other interactions.
use async_trait::async_trait;
use thiserror::Error;

use crate::models::{NewComment, RawComment};

/// Comment store errors
#[derive(Error, Debug)]
pub enum StoreError {
    /// Backend unreachable or refusing connections
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// Request reached the backend but failed
    #[error("Store request failed: {0}")]
    Request(String),

    /// Backend returned a record the client cannot decode
    #[error("Malformed store record: {0}")]
    Malformed(String),
}

/// Persistence collaborator for comments
///
/// `create` has no partial-success states: either the store assigns an id
/// and echoes the full record back, or the call fails and nothing was
/// persisted from the client's point of view.
#[async_trait]
pub trait CommentStore: Send + Sync {
    /// Fetch all comments for a post, in store order
    async fn fetch(&self, post_id: &str) -> Result<Vec<RawComment>, StoreError>;

    /// Persist a new comment; the store assigns the id
    async fn create(&self, comment: &NewComment) -> Result<RawComment, StoreError>;
}
