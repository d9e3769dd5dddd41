//! Post entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A post row. Roots start a thread; replies hang below a parent post.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Post {
    /// Unique post identifier.
    pub id: i64,
    /// Owning board.
    pub board_id: i64,
    /// Author's user id.
    pub user_id: i64,
    /// Direct parent for replies, `None` for thread roots.
    pub parent_id: Option<i64>,
    /// Author display name at the time of writing.
    pub author: String,
    /// Title.
    pub title: String,
    /// HTML body, possibly with inline base64 images.
    pub content: String,
    /// Id of the thread root (equal to `id` for roots).
    pub group_id: i64,
    /// 1-based position among the parent's replies (0 for roots).
    pub reply_order: i32,
    /// Materialized path of reply ordinals, empty for roots.
    #[serde(skip_serializing, default)]
    pub thread_path: String,
    /// Nesting level, 0 for roots.
    pub depth: i32,
    /// Display position inside the thread, derived from `thread_path`.
    pub sequence: i64,
    /// Derived thumbnail URL path.
    pub thumbnail: Option<String>,
    pub view_count: i64,
    pub like_count: i64,
    pub dislike_count: i64,
    pub comments_count: i64,
    /// When the post was created.
    pub created_at: DateTime<Utc>,
    /// When the post was last edited.
    pub updated_at: DateTime<Utc>,
    /// Soft-delete marker.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Post {
    /// Check if this post starts a thread.
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Whether the post has been soft-deleted.
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// A post as shown in board listings and thread trees (no body).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PostListItem {
    pub id: i64,
    pub board_id: i64,
    pub user_id: i64,
    pub parent_id: Option<i64>,
    pub author: String,
    pub title: String,
    pub group_id: i64,
    #[serde(skip_serializing, default)]
    pub thread_path: String,
    pub depth: i32,
    pub sequence: i64,
    pub thumbnail: Option<String>,
    pub view_count: i64,
    pub like_count: i64,
    pub dislike_count: i64,
    pub comments_count: i64,
    pub created_at: DateTime<Utc>,
}

/// Data required to insert a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePost {
    /// Owning board.
    pub board_id: i64,
    /// Author id.
    pub user_id: i64,
    /// Author display name.
    pub author: String,
    /// Title (already trimmed).
    pub title: String,
    /// HTML body.
    pub content: String,
    /// Parent post for replies.
    pub parent_id: Option<i64>,
    /// Derived thumbnail path.
    pub thumbnail: Option<String>,
}

/// Editable post fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePost {
    pub title: String,
    pub content: String,
    pub thumbnail: Option<String>,
}
