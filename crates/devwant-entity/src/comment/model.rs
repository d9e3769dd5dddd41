//! Comment entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A comment on a post, optionally replying to another comment.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Comment {
    /// Unique comment identifier.
    pub id: i64,
    /// Post the comment belongs to.
    pub post_id: i64,
    /// Author's user id.
    pub user_id: i64,
    /// Author display name.
    pub author: String,
    /// Plain-text body.
    pub content: String,
    /// Comment this one replies to.
    pub parent_id: Option<i64>,
    /// User mentioned with `@name`.
    pub mentioned_user_id: Option<i64>,
    /// Display name of the mentioned user (joined on read).
    #[sqlx(default)]
    pub mentioned_user_name: Option<String>,
    /// When the comment was written.
    pub created_at: DateTime<Utc>,
}

/// Data required to insert a comment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateComment {
    pub post_id: i64,
    pub user_id: i64,
    pub author: String,
    pub content: String,
    pub parent_id: Option<i64>,
    pub mentioned_user_id: Option<i64>,
}
