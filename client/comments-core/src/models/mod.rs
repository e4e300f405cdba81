/// Data models for the comment engine
///
/// Two shapes exist on purpose: `RawComment` is the loose wire record as the
/// store returns it (everything optional but the id), and `Comment` is the
/// normalized record the rest of the engine works with. Normalization happens
/// exactly once, at the store boundary, in [`Comment::from_raw`].
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Parent reference of a comment
///
/// Explicit sum type instead of a nullable id: a comment either starts a
/// thread or replies to exactly one root. The wire format remains
/// `parentId?: string | null`; absent, null and blank strings all decode to
/// `Root`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Parent {
    #[default]
    Root,
    ReplyTo(String),
}

impl Parent {
    /// Decode the wire representation of `parentId`
    pub fn from_wire(raw: Option<String>) -> Self {
        match raw {
            Some(id) if !id.trim().is_empty() => Parent::ReplyTo(id),
            _ => Parent::Root,
        }
    }

    /// Encode back to the wire representation
    pub fn to_wire(&self) -> Option<&str> {
        match self {
            Parent::Root => None,
            Parent::ReplyTo(id) => Some(id),
        }
    }

    pub fn is_root(&self) -> bool {
        matches!(self, Parent::Root)
    }
}

/// Serde adapter mapping `Parent` to the nullable `parentId` wire field
pub(crate) mod parent_wire {
    use super::Parent;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(parent: &Parent, serializer: S) -> Result<S::Ok, S::Error> {
        parent.to_wire().serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Parent, D::Error> {
        Ok(Parent::from_wire(Option::<String>::deserialize(deserializer)?))
    }
}

/// Wire-shaped comment record as returned by the store
///
/// Only the id is required; every other field may be missing in degraded
/// store data. This type never leaves the store boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawComment {
    pub id: String,
    #[serde(default)]
    pub post_id: Option<String>,
    #[serde(default)]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub likes: Option<i64>,
    #[serde(default)]
    pub is_verified: Option<bool>,
}

/// Normalized comment record
///
/// Immutable once created; `likes` is a display counter no engine operation
/// mutates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub post_id: String,
    #[serde(rename = "parentId", default, with = "parent_wire")]
    pub parent: Parent,
    pub author: String,
    pub avatar: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub likes: i64,
    pub is_verified: bool,
}

impl Comment {
    /// Normalize a wire record into an engine comment
    ///
    /// `post_id` is the id the fetch was issued for; a record missing its
    /// own owner is assumed to belong to that post. Field defaults:
    ///
    /// | field        | default                              |
    /// |--------------|--------------------------------------|
    /// | `postId`     | the requested post id                |
    /// | `parentId`   | `Root` (absent, null, blank string)  |
    /// | `author`     | `"Anonymous"`                        |
    /// | `avatar`     | `""`                                 |
    /// | `content`    | `""`                                 |
    /// | `createdAt`  | Unix epoch (sorts before real data)  |
    /// | `likes`      | `0`                                  |
    /// | `isVerified` | `false`                              |
    pub fn from_raw(raw: RawComment, post_id: &str) -> Self {
        Comment {
            id: raw.id,
            post_id: raw.post_id.unwrap_or_else(|| post_id.to_string()),
            parent: Parent::from_wire(raw.parent_id),
            author: raw.author.unwrap_or_else(|| "Anonymous".to_string()),
            avatar: raw.avatar.unwrap_or_default(),
            content: raw.content.unwrap_or_default(),
            created_at: raw.created_at.unwrap_or(DateTime::UNIX_EPOCH),
            likes: raw.likes.unwrap_or(0),
            is_verified: raw.is_verified.unwrap_or(false),
        }
    }
}

/// Creation payload; the store assigns the id and echoes the record back
///
/// `isVerified` is not part of the payload: it is derived from author
/// identity on the store side, never set by the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    pub post_id: String,
    #[serde(rename = "parentId", default, with = "parent_wire")]
    pub parent: Parent,
    pub author: String,
    pub avatar: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub likes: i64,
}
