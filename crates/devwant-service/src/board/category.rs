//! Admin category management.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::info;

use devwant_core::error::AppError;
use devwant_core::result::AppResult;
use devwant_database::repositories::{BoardRepository, CategoryRepository};
use devwant_entity::category::{Category, CategoryOrder, CreateCategory, UpdateCategory};

use crate::context::RequestContext;
use crate::input;
use crate::messages;

/// Manages the categories of a board.
#[derive(Debug, Clone)]
pub struct CategoryService {
    /// Board repository.
    board_repo: Arc<BoardRepository>,
    /// Category repository.
    category_repo: Arc<CategoryRepository>,
}

impl CategoryService {
    /// Creates a new category service.
    pub fn new(board_repo: Arc<BoardRepository>, category_repo: Arc<CategoryRepository>) -> Self {
        Self {
            board_repo,
            category_repo,
        }
    }

    /// Categories of a board in display order.
    pub async fn list(&self, board_id: i64) -> AppResult<Vec<Category>> {
        self.require_board(board_id).await?;
        self.category_repo.find_by_board(board_id).await
    }

    /// Append a category to a board.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        board_id: i64,
        name: &str,
        description: Option<&str>,
    ) -> AppResult<Category> {
        self.require_board(board_id).await?;
        let name = input::required(name, messages::CATEGORY_NAME_REQUIRED)?;

        let category = self
            .category_repo
            .create(&CreateCategory {
                board_id,
                name,
                description: input::optional(description),
            })
            .await?;

        info!(admin_id = ctx.user_id, board_id, category_id = category.id, "Category created");
        Ok(category)
    }

    /// Rename or re-describe a category.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        board_id: i64,
        category_id: i64,
        name: Option<&str>,
        description: Option<&str>,
    ) -> AppResult<Category> {
        let changes = UpdateCategory {
            name: match name {
                Some(name) => Some(input::required(name, messages::CATEGORY_NAME_REQUIRED)?),
                None => None,
            },
            description: description.map(|d| d.trim().to_string()),
        };

        let category = self
            .category_repo
            .update(board_id, category_id, &changes)
            .await?;
        info!(admin_id = ctx.user_id, board_id, category_id, "Category updated");
        Ok(category)
    }

    /// Delete a category.
    pub async fn delete(&self, ctx: &RequestContext, board_id: i64, category_id: i64) -> AppResult<()> {
        self.category_repo.delete(board_id, category_id).await?;
        info!(admin_id = ctx.user_id, board_id, category_id, "Category deleted");
        Ok(())
    }

    /// Apply a new category order in one transaction.
    pub async fn reorder(
        &self,
        ctx: &RequestContext,
        board_id: i64,
        orders: &[CategoryOrder],
    ) -> AppResult<Vec<Category>> {
        validate_orders(orders)?;
        self.require_board(board_id).await?;

        let categories = self.category_repo.reorder(board_id, orders).await?;
        info!(admin_id = ctx.user_id, board_id, count = orders.len(), "Categories reordered");
        Ok(categories)
    }

    async fn require_board(&self, board_id: i64) -> AppResult<()> {
        self.board_repo
            .find_by_id_including_deleted(board_id)
            .await?
            .map(|_| ())
            .ok_or_else(|| AppError::not_found(messages::ADMIN_BOARD_NOT_FOUND))
    }
}

/// A reorder request names each category at most once.
fn validate_orders(orders: &[CategoryOrder]) -> AppResult<()> {
    if orders.is_empty() {
        return Err(AppError::validation(messages::INVALID_REQUEST));
    }
    let mut seen = HashSet::with_capacity(orders.len());
    if let Some(dup) = orders.iter().find(|o| !seen.insert(o.id)) {
        return Err(AppError::validation(format!(
            "카테고리 {}이(가) 중복되었습니다.",
            dup.id
        )));
    }
    Ok(())
}
