//! Public board directory and board pages.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use devwant_core::error::AppError;
use devwant_core::result::AppResult;
use devwant_core::types::pagination::{PageRequest, PageResponse};
use devwant_database::repositories::{BoardRepository, CategoryRepository, PostRepository};
use devwant_entity::board::Board;
use devwant_entity::category::Category;
use devwant_entity::post::PostListItem;

use crate::input;
use crate::messages;

/// A board with one page of its posts in thread order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardPage {
    pub board: Board,
    pub posts: PageResponse<PostListItem>,
}

/// Read-only board operations for visitors.
#[derive(Debug, Clone)]
pub struct BoardService {
    /// Board repository.
    board_repo: Arc<BoardRepository>,
    /// Category repository.
    category_repo: Arc<CategoryRepository>,
    /// Post repository.
    post_repo: Arc<PostRepository>,
}

impl BoardService {
    /// Creates a new board service.
    pub fn new(
        board_repo: Arc<BoardRepository>,
        category_repo: Arc<CategoryRepository>,
        post_repo: Arc<PostRepository>,
    ) -> Self {
        Self {
            board_repo,
            category_repo,
            post_repo,
        }
    }

    /// Live boards, optionally of one category.
    pub async fn list_boards(&self, category: Option<&str>) -> AppResult<Vec<Board>> {
        let category = input::optional(category);
        self.board_repo.find_active(category.as_deref()).await
    }

    /// A board and one page of its posts, optionally filtered by a search term.
    pub async fn get_board_page(
        &self,
        code: &str,
        search: Option<&str>,
        page: PageRequest,
    ) -> AppResult<BoardPage> {
        let board = live_board(&self.board_repo, code).await?;
        let search = input::optional(search);
        debug!(board = %board.code, search = ?search, page = page.page, "Loading board page");

        let posts = self
            .post_repo
            .list_by_board(board.id, search.as_deref(), &page)
            .await?;

        Ok(BoardPage { board, posts })
    }

    /// Categories of a live board.
    pub async fn list_categories(&self, code: &str) -> AppResult<Vec<Category>> {
        let board = live_board(&self.board_repo, code).await?;
        self.category_repo.find_by_board(board.id).await
    }
}

/// The live board with this code, or the "no such board" error.
pub(crate) async fn live_board(repo: &BoardRepository, code: &str) -> AppResult<Board> {
    repo.find_by_code(code.trim())
        .await?
        .ok_or_else(|| AppError::not_found(messages::BOARD_NOT_FOUND))
}
