//! Board repository implementation.

use sqlx::{PgPool, Postgres, QueryBuilder};

use devwant_core::error::{AppError, ErrorKind};
use devwant_core::messages;
use devwant_core::result::AppResult;
use devwant_entity::board::{Board, CreateBoard, UpdateBoard};

use super::{db_err, violated_constraint};

/// Repository for boards, including soft-delete and restore.
#[derive(Debug, Clone)]
pub struct BoardRepository {
    pool: PgPool,
}

impl BoardRepository {
    /// Create a new board repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Live boards for the public directory, optionally filtered by category.
    pub async fn find_active(&self, category: Option<&str>) -> AppResult<Vec<Board>> {
        let mut qb: QueryBuilder<'_, Postgres> =
            QueryBuilder::new("SELECT * FROM boards WHERE deleted_at IS NULL");
        if let Some(category) = category {
            qb.push(" AND category = ").push_bind(category);
        }
        qb.push(" ORDER BY category ASC, title ASC, id ASC");

        qb.build_query_as::<Board>()
            .fetch_all(&self.pool)
            .await
            .map_err(db_err("Failed to list boards"))
    }

    /// Every board, deleted ones included, for the admin screen.
    pub async fn find_all(&self) -> AppResult<Vec<Board>> {
        sqlx::query_as::<_, Board>("SELECT * FROM boards ORDER BY created_at DESC, id DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(db_err("Failed to list all boards"))
    }

    /// Find a live board by its code.
    pub async fn find_by_code(&self, code: &str) -> AppResult<Option<Board>> {
        sqlx::query_as::<_, Board>("SELECT * FROM boards WHERE code = $1 AND deleted_at IS NULL")
            .bind(code)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err("Failed to find board by code"))
    }

    /// Find a live board by id.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Board>> {
        sqlx::query_as::<_, Board>("SELECT * FROM boards WHERE id = $1 AND deleted_at IS NULL")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err("Failed to find board"))
    }

    /// Find a board by id whether or not it is deleted.
    pub async fn find_by_id_including_deleted(&self, id: i64) -> AppResult<Option<Board>> {
        sqlx::query_as::<_, Board>("SELECT * FROM boards WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err("Failed to find board"))
    }

    /// Create a board. A duplicate code is a conflict.
    pub async fn create(&self, data: &CreateBoard) -> AppResult<Board> {
        sqlx::query_as::<_, Board>(
            "INSERT INTO boards (code, title, description, category) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(&data.code)
        .bind(&data.title)
        .bind(&data.description)
        .bind(&data.category)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match violated_constraint(&e) {
            Some("boards_code_key") => {
                AppError::conflict(messages::BOARD_CODE_TAKEN)
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create board", e),
        })
    }

    /// Update title, description, or category of a live board.
    pub async fn update(&self, id: i64, data: &UpdateBoard) -> AppResult<Board> {
        sqlx::query_as::<_, Board>(
            "UPDATE boards SET \
                title = COALESCE($2, title), \
                description = COALESCE($3, description), \
                category = COALESCE($4, category), \
                updated_at = NOW() \
             WHERE id = $1 AND deleted_at IS NULL RETURNING *",
        )
        .bind(id)
        .bind(&data.title)
        .bind(&data.description)
        .bind(&data.category)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_err("Failed to update board"))?
        .ok_or_else(|| AppError::not_found(messages::ADMIN_BOARD_NOT_FOUND))
    }

    /// Mark a board as deleted. Returns false when it was not live.
    pub async fn soft_delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE boards SET deleted_at = NOW(), updated_at = NOW() \
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(db_err("Failed to delete board"))?;
        Ok(result.rows_affected() > 0)
    }

    /// Remove a board and, through cascades, its categories, posts,
    /// comments, and votes.
    pub async fn hard_delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM boards WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_err("Failed to permanently delete board"))?;
        Ok(result.rows_affected() > 0)
    }

    /// Clear the deleted marker.
    pub async fn restore(&self, id: i64) -> AppResult<Board> {
        sqlx::query_as::<_, Board>(
            "UPDATE boards SET deleted_at = NULL, updated_at = NOW() \
             WHERE id = $1 AND deleted_at IS NOT NULL RETURNING *",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_err("Failed to restore board"))?
        .ok_or_else(|| AppError::not_found(messages::DELETED_BOARD_NOT_FOUND))
    }
}
