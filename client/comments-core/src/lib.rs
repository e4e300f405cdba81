/// Comment Engine Library
///
/// Turns a flat per-post comment collection into two-level discussion
/// threads and manages the reply-targeting and submission lifecycle against
/// an injected persistence collaborator. Rendering, routing and the store
/// implementation live in the embedding client.
///
/// # Modules
///
/// - `models`: Comment data structures and boundary normalization
/// - `services`: Thread building, reply targeting, submission pipeline
/// - `store`: Persistence collaborator contract
/// - `identity`: Authenticated-user lookup contract
/// - `notify`: Transient user-notice seam
/// - `error`: Error types and handling
/// - `config`: Configuration management
pub mod config;
pub mod error;
pub mod identity;
pub mod models;
pub mod notify;
pub mod services;
pub mod store;

pub use config::CommentsConfig;
pub use error::{CommentError, Result};
pub use identity::{Identity, IdentityProvider};
pub use models::{Comment, NewComment, Parent, RawComment};
pub use notify::{NoticeLevel, Notifier, TracingNotifier};
pub use services::{build_threads, CommentService, CommentThread, Composer, ReplyTarget};
pub use store::{CommentStore, StoreError};
