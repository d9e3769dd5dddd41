//! Board entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A topic board that contains posts.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Board {
    /// Unique board identifier.
    pub id: i64,
    /// URL code, unique and fixed after creation.
    pub code: String,
    /// Board title.
    pub title: String,
    /// Short description shown in listings.
    pub description: Option<String>,
    /// Free-form grouping label used by the board directory.
    pub category: String,
    /// Number of live posts, recounted on every post write.
    pub posts_count: i64,
    /// When the board was created.
    pub created_at: DateTime<Utc>,
    /// When the board was last updated.
    pub updated_at: DateTime<Utc>,
    /// Soft-delete marker.
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Board {
    /// Whether the board has been soft-deleted.
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// Data required to create a board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBoard {
    /// URL code.
    pub code: String,
    /// Title.
    pub title: String,
    /// Description.
    pub description: Option<String>,
    /// Directory category.
    pub category: String,
}

/// Editable board fields. A board code never changes after creation.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateBoard {
    /// New title.
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New directory category.
    pub category: Option<String>,
}
