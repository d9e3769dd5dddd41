//! Category entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A category within a board, sorted by `order_num`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Category {
    /// Unique category identifier.
    pub id: i64,
    /// Owning board.
    pub board_id: i64,
    /// Category name, unique within the board.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Explicit sort key.
    pub order_num: i32,
    /// When the category was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCategory {
    pub board_id: i64,
    pub name: String,
    pub description: Option<String>,
}

/// Editable category fields.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateCategory {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// One entry of a reorder request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryOrder {
    /// Category id.
    pub id: i64,
    /// New sort key.
    pub order_num: i32,
}
