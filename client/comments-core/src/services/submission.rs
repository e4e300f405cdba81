/// Submission pipeline and comment retrieval
///
/// `CommentService` owns the client-visible comment lifecycle for a post:
/// cached fetches feeding the thread builder, and validated submissions
/// against the store with explicit cache invalidation on success.
use std::sync::Arc;

use dashmap::DashSet;
use tracing::{debug, info, warn};

use crate::config::CommentsConfig;
use crate::error::{CommentError, Result};
use crate::identity::IdentityProvider;
use crate::models::{Comment, NewComment};
use crate::notify::{NoticeLevel, Notifier};
use crate::services::reply_target::Composer;
use crate::services::threads::{build_threads, CommentThread};
use crate::store::CommentStore;
use chrono::Utc;
use query_cache::{build_cache_key, QueryCache};

/// Comment service - handles comment retrieval and submission for posts
pub struct CommentService {
    store: Arc<dyn CommentStore>,
    cache: Arc<dyn QueryCache>,
    identity: Arc<dyn IdentityProvider>,
    notifier: Arc<dyn Notifier>,
    config: CommentsConfig,
    in_flight: DashSet<String>,
}

/// Clears the advisory pending marker when a submission settles
struct InFlightGuard<'a> {
    set: &'a DashSet<String>,
    post_id: String,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.set.remove(&self.post_id);
    }
}

impl CommentService {
    pub fn new(
        store: Arc<dyn CommentStore>,
        cache: Arc<dyn QueryCache>,
        identity: Arc<dyn IdentityProvider>,
        notifier: Arc<dyn Notifier>,
        config: CommentsConfig,
    ) -> Self {
        Self {
            store,
            cache,
            identity,
            notifier,
            config,
            in_flight: DashSet::new(),
        }
    }

    fn cache_key(post_id: &str) -> String {
        build_cache_key("comments", post_id)
    }

    /// Fetch the flat comment list for a post, reading through the cache
    ///
    /// Cache failures (including undecodable cached payloads) degrade to a
    /// store fetch and are never surfaced to the caller.
    pub async fn fetch_comments(&self, post_id: &str) -> Result<Vec<Comment>> {
        let key = Self::cache_key(post_id);

        match self.cache.get(&key).await {
            Ok(Some(value)) => match serde_json::from_value::<Vec<Comment>>(value) {
                Ok(comments) => return Ok(comments),
                Err(e) => warn!(post_id, error = %e, "cached comment list undecodable, refetching"),
            },
            Ok(None) => {}
            Err(e) => warn!(post_id, error = %e, "cache read failed, falling back to store"),
        }

        let raw = self.store.fetch(post_id).await?;
        let comments: Vec<Comment> = raw
            .into_iter()
            .map(|record| Comment::from_raw(record, post_id))
            .collect();
        debug!(post_id, count = comments.len(), "fetched comments from store");

        match serde_json::to_value(&comments) {
            Ok(value) => {
                if let Err(e) = self.cache.put(&key, value, self.config.cache_ttl_secs).await {
                    warn!(post_id, error = %e, "cache write failed");
                }
            }
            Err(e) => warn!(post_id, error = %e, "comment list not cacheable"),
        }

        Ok(comments)
    }

    /// Fetch and thread the comments for a post
    ///
    /// A store failure yields the empty list, which callers cannot tell
    /// apart from a post with no comments; callers that need the
    /// distinction use [`CommentService::fetch_comments`] directly.
    pub async fn fetch_threads(&self, post_id: &str) -> Vec<CommentThread> {
        match self.fetch_comments(post_id).await {
            Ok(comments) => build_threads(comments),
            Err(e) => {
                warn!(post_id, error = %e, "comment fetch failed, rendering empty thread list");
                Vec::new()
            }
        }
    }

    /// Whether a submission for this post is currently awaiting the store
    ///
    /// Advisory only: the UI disables its submit control on `true`, but a
    /// concurrent submission is not rejected here.
    pub fn submission_pending(&self, post_id: &str) -> bool {
        self.in_flight.contains(post_id)
    }

    /// Validate and submit the composed comment
    ///
    /// On success the post's cached comment list is invalidated, the
    /// composer resets to idle with empty text, and a success notice is
    /// surfaced. On store failure the composer is left untouched so the user
    /// can resubmit, and a failure notice is surfaced. Validation failures
    /// are silent: the UI prevents them, so no notice is raised and the
    /// store is never called.
    pub async fn submit(&self, post_id: &str, composer: &mut Composer) -> Result<Comment> {
        let text = composer.text();
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(CommentError::Validation("comment content is empty".to_string()));
        }
        if trimmed.chars().count() > self.config.max_content_len {
            return Err(CommentError::Validation(format!(
                "comment exceeds {} characters",
                self.config.max_content_len
            )));
        }

        let identity = self
            .identity
            .current_identity()
            .ok_or(CommentError::NotAuthenticated)?;

        // Raw compose text on purpose: trimming is validation-only
        let new_comment = NewComment {
            post_id: post_id.to_string(),
            parent: composer.parent(),
            author: identity.name,
            avatar: identity.avatar,
            content: text.to_string(),
            created_at: Utc::now(),
            likes: 0,
        };

        let _guard = self.in_flight.insert(post_id.to_string()).then(|| InFlightGuard {
            set: &self.in_flight,
            post_id: post_id.to_string(),
        });

        match self.store.create(&new_comment).await {
            Ok(record) => {
                let created = Comment::from_raw(record, post_id);

                // Invalidation is scheduled strictly after create resolved;
                // the refetch it triggers is not awaited here
                if let Err(e) = self.cache.invalidate(&Self::cache_key(post_id)).await {
                    warn!(post_id, error = %e, "cache invalidation failed");
                }

                composer.reset();
                self.notifier
                    .notify(NoticeLevel::Success, "Comment added successfully!");
                info!(post_id, comment_id = %created.id, "comment created");
                Ok(created)
            }
            Err(e) => {
                self.notifier.notify(NoticeLevel::Error, "Failed to add comment");
                warn!(post_id, error = %e, "comment creation failed");
                Err(e.into())
            }
        }
    }

    /// Like action stub: surfaces a notice, persists nothing
    pub fn like_comment(&self, comment_id: &str) {
        debug!(comment_id, "like requested");
        self.notifier
            .notify(NoticeLevel::Info, "Like feature coming soon!");
    }
}
