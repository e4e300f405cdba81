/// Thread builder
///
/// Partitions a flat, store-ordered comment list into two-level threads:
/// roots in their original order, each carrying its replies sorted by
/// creation time. Nesting stops at one level; a reply whose parent is not a
/// root in the current set is an orphan and is dropped from the output.
use std::collections::HashMap;

use tracing::debug;

use crate::models::{Comment, Parent};

/// A root comment plus its time-ordered replies
#[derive(Debug, Clone, PartialEq)]
pub struct CommentThread {
    pub root: Comment,
    pub replies: Vec<Comment>,
}

/// Build discussion threads from a flat comment list
///
/// Root order is whatever the store returned; the builder never re-sorts
/// roots. Replies are sorted ascending by `created_at` with a stable sort,
/// so ties keep their relative store order. Orphans (parent is itself a
/// reply, parent id unknown, or self-referential) never appear in the
/// output.
pub fn build_threads(comments: Vec<Comment>) -> Vec<CommentThread> {
    let mut roots = Vec::new();
    let mut replies_by_parent: HashMap<String, Vec<Comment>> = HashMap::new();

    for comment in comments {
        match &comment.parent {
            Parent::Root => roots.push(comment),
            Parent::ReplyTo(parent_id) => replies_by_parent
                .entry(parent_id.clone())
                .or_default()
                .push(comment),
        }
    }

    let threads: Vec<CommentThread> = roots
        .into_iter()
        .map(|root| {
            let mut replies = replies_by_parent.remove(&root.id).unwrap_or_default();
            replies.sort_by_key(|reply| reply.created_at);
            CommentThread { root, replies }
        })
        .collect();

    let orphans: usize = replies_by_parent.values().map(Vec::len).sum();
    if orphans > 0 {
        debug!(orphans, "dropped replies with no matching root");
    }

    threads
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, Utc};

    fn comment(id: &str, parent: Parent, created_at: DateTime<Utc>) -> Comment {
        Comment {
            id: id.to_string(),
            post_id: "post-1".to_string(),
            parent,
            author: "alice".to_string(),
            avatar: "".to_string(),
            content: format!("comment {}", id),
            created_at,
            likes: 0,
            is_verified: false,
        }
    }

    fn reply_to(id: &str, parent_id: &str, created_at: DateTime<Utc>) -> Comment {
        comment(id, Parent::ReplyTo(parent_id.to_string()), created_at)
    }

    fn ids(comments: &[Comment]) -> Vec<&str> {
        comments.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn test_empty_input_yields_no_threads() {
        assert!(build_threads(Vec::new()).is_empty());
    }

    #[test]
    fn test_roots_keep_store_order_and_replies_sort_by_time() {
        let t0 = Utc::now();
        let (t1, t2, t3) = (
            t0 + Duration::seconds(1),
            t0 + Duration::seconds(2),
            t0 + Duration::seconds(3),
        );

        // Roots arrive out of chronological order; reply "3" predates "2"
        let threads = build_threads(vec![
            comment("1", Parent::Root, t1),
            reply_to("2", "1", t3),
            reply_to("3", "1", t2),
            comment("4", Parent::Root, t0),
        ]);

        assert_eq!(threads.len(), 2);
        assert_eq!(threads[0].root.id, "1");
        assert_eq!(threads[1].root.id, "4");
        assert_eq!(ids(&threads[0].replies), vec!["3", "2"]);
        assert!(threads[1].replies.is_empty());
    }

    #[test]
    fn test_reply_to_a_reply_is_dropped() {
        let t0 = Utc::now();
        let threads = build_threads(vec![
            comment("1", Parent::Root, t0),
            reply_to("2", "1", t0 + Duration::seconds(3)),
            reply_to("3", "1", t0 + Duration::seconds(2)),
            comment("4", Parent::Root, t0),
            // Parent "2" is itself a reply, not a root
            reply_to("5", "2", t0 + Duration::seconds(4)),
        ]);

        assert_eq!(threads.len(), 2);
        assert_eq!(ids(&threads[0].replies), vec!["3", "2"]);
        assert!(threads[1].replies.is_empty());
    }

    #[test]
    fn test_reply_to_unknown_id_is_dropped() {
        let t0 = Utc::now();
        let threads = build_threads(vec![
            comment("1", Parent::Root, t0),
            reply_to("2", "missing", t0),
        ]);

        assert_eq!(threads.len(), 1);
        assert!(threads[0].replies.is_empty());
    }

    #[test]
    fn test_self_referential_parent_is_dropped() {
        let t0 = Utc::now();
        let threads = build_threads(vec![
            comment("1", Parent::Root, t0),
            reply_to("2", "2", t0),
        ]);

        assert_eq!(threads.len(), 1);
        assert!(threads[0].replies.is_empty());
    }

    #[test]
    fn test_only_replies_yields_empty_output() {
        let t0 = Utc::now();
        let threads = build_threads(vec![reply_to("2", "1", t0), reply_to("3", "1", t0)]);
        assert!(threads.is_empty());
    }

    #[test]
    fn test_reply_ties_keep_store_order() {
        let t0 = Utc::now();
        let threads = build_threads(vec![
            comment("1", Parent::Root, t0),
            reply_to("b", "1", t0),
            reply_to("a", "1", t0),
        ]);

        assert_eq!(ids(&threads[0].replies), vec!["b", "a"]);
    }

    #[test]
    fn test_reply_count_bounded_by_non_roots() {
        let t0 = Utc::now();
        let input = vec![
            comment("1", Parent::Root, t0),
            comment("2", Parent::Root, t0),
            reply_to("3", "1", t0),
            reply_to("4", "2", t0),
            reply_to("5", "nope", t0),
        ];
        let total = input.len();

        let threads = build_threads(input);
        let roots = threads.len();
        let replies: usize = threads.iter().map(|t| t.replies.len()).sum();

        assert_eq!(roots, 2);
        // One orphan, so strictly fewer replies than non-root inputs
        assert_eq!(replies, total - roots - 1);
    }
}
