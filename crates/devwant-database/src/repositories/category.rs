//! Category repository implementation.

use sqlx::PgPool;
use tracing::debug;

use devwant_core::error::{AppError, ErrorKind};
use devwant_core::messages;
use devwant_core::result::AppResult;
use devwant_entity::category::{Category, CategoryOrder, CreateCategory, UpdateCategory};

use super::{db_err, violated_constraint};

/// Repository for per-board categories.
#[derive(Debug, Clone)]
pub struct CategoryRepository {
    pool: PgPool,
}

impl CategoryRepository {
    /// Create a new category repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Categories of a board in display order.
    pub async fn find_by_board(&self, board_id: i64) -> AppResult<Vec<Category>> {
        sqlx::query_as::<_, Category>(
            "SELECT * FROM categories WHERE board_id = $1 ORDER BY order_num ASC, id ASC",
        )
        .bind(board_id)
        .fetch_all(&self.pool)
        .await
        .map_err(db_err("Failed to list categories"))
    }

    /// Find one category of a board.
    pub async fn find_in_board(&self, board_id: i64, id: i64) -> AppResult<Option<Category>> {
        sqlx::query_as::<_, Category>("SELECT * FROM categories WHERE id = $1 AND board_id = $2")
            .bind(id)
            .bind(board_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err("Failed to find category"))
    }

    /// Append a category at the end of the board's order.
    pub async fn create(&self, data: &CreateCategory) -> AppResult<Category> {
        sqlx::query_as::<_, Category>(
            "INSERT INTO categories (board_id, name, description, order_num) \
             SELECT $1, $2, $3, COALESCE(MAX(order_num), 0) + 1 \
             FROM categories WHERE board_id = $1 \
             RETURNING *",
        )
        .bind(data.board_id)
        .bind(&data.name)
        .bind(&data.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match violated_constraint(&e) {
            Some("categories_board_name_key") => {
                AppError::conflict(messages::CATEGORY_NAME_TAKEN)
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create category", e),
        })
    }

    /// Rename or re-describe a category.
    pub async fn update(
        &self,
        board_id: i64,
        id: i64,
        data: &UpdateCategory,
    ) -> AppResult<Category> {
        sqlx::query_as::<_, Category>(
            "UPDATE categories SET \
                name = COALESCE($3, name), \
                description = COALESCE($4, description) \
             WHERE id = $1 AND board_id = $2 RETURNING *",
        )
        .bind(id)
        .bind(board_id)
        .bind(&data.name)
        .bind(&data.description)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| match violated_constraint(&e) {
            Some("categories_board_name_key") => {
                AppError::conflict(messages::CATEGORY_NAME_TAKEN)
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to update category", e),
        })?
        .ok_or_else(|| AppError::not_found(messages::CATEGORY_NOT_FOUND))
    }

    /// Delete a category of a board.
    pub async fn delete(&self, board_id: i64, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1 AND board_id = $2")
            .bind(id)
            .bind(board_id)
            .execute(&self.pool)
            .await
            .map_err(db_err("Failed to delete category"))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(messages::CATEGORY_NOT_FOUND));
        }
        Ok(())
    }

    /// Apply a new ordering atomically. Either every listed category of the
    /// board is updated or none is.
    pub async fn reorder(&self, board_id: i64, orders: &[CategoryOrder]) -> AppResult<Vec<Category>> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(db_err("Failed to begin reorder transaction"))?;

        for order in orders {
            let result = sqlx::query(
                "UPDATE categories SET order_num = $3 WHERE id = $1 AND board_id = $2",
            )
            .bind(order.id)
            .bind(board_id)
            .bind(order.order_num)
            .execute(&mut *tx)
            .await
            .map_err(db_err("Failed to reorder categories"))?;

            if result.rows_affected() == 0 {
                debug!(category_id = order.id, board_id, "Reorder names a foreign category");
                return Err(AppError::not_found(messages::CATEGORY_NOT_FOUND));
            }
        }

        let categories = sqlx::query_as::<_, Category>(
            "SELECT * FROM categories WHERE board_id = $1 ORDER BY order_num ASC, id ASC",
        )
        .bind(board_id)
        .fetch_all(&mut *tx)
        .await
        .map_err(db_err("Failed to list categories"))?;

        tx.commit()
            .await
            .map_err(db_err("Failed to commit reorder"))?;

        Ok(categories)
    }
}
