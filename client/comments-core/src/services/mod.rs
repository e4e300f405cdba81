/// Business logic layer for the comment engine
pub mod reply_target;
pub mod submission;
pub mod threads;

pub use reply_target::{Composer, ReplyTarget};
pub use submission::CommentService;
pub use threads::{build_threads, CommentThread};
