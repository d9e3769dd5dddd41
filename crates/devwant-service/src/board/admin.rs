//! Admin board management: create, edit, soft/hard delete, restore.

use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::info;

use devwant_core::error::AppError;
use devwant_core::result::AppResult;
use devwant_database::repositories::BoardRepository;
use devwant_entity::board::{Board, CreateBoard, UpdateBoard};

use crate::context::RequestContext;
use crate::input;
use crate::messages;

/// Board codes appear in URLs.
static BOARD_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9_-]{2,32}$").expect("Invalid board code regex"));

/// Request to create a board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBoardRequest {
    pub code: String,
    pub title: String,
    pub description: Option<String>,
    pub category: String,
}

/// Request to edit a board. `code` may be echoed back but never changed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateBoardRequest {
    pub code: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
}

/// Handles administrative board operations.
#[derive(Debug, Clone)]
pub struct BoardAdminService {
    /// Board repository.
    board_repo: Arc<BoardRepository>,
}

impl BoardAdminService {
    /// Creates a new admin board service.
    pub fn new(board_repo: Arc<BoardRepository>) -> Self {
        Self { board_repo }
    }

    /// Every board, deleted ones included.
    pub async fn list_all(&self) -> AppResult<Vec<Board>> {
        self.board_repo.find_all().await
    }

    /// One board, deleted or not.
    pub async fn get(&self, id: i64) -> AppResult<Board> {
        self.board_repo
            .find_by_id_including_deleted(id)
            .await?
            .ok_or_else(|| AppError::not_found(messages::ADMIN_BOARD_NOT_FOUND))
    }

    /// Create a board.
    pub async fn create(&self, ctx: &RequestContext, req: CreateBoardRequest) -> AppResult<Board> {
        let code = req.code.trim().to_string();
        validate_code(&code)?;
        let title = input::required(&req.title, "게시판 이름을 입력해주세요.")?;
        let category = input::required(&req.category, "게시판 분류를 입력해주세요.")?;

        let board = self
            .board_repo
            .create(&CreateBoard {
                code,
                title,
                description: input::optional(req.description.as_deref()),
                category,
            })
            .await?;

        info!(admin_id = ctx.user_id, board_id = board.id, code = %board.code, "Board created");
        Ok(board)
    }

    /// Edit title, description, or category of a live board.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: i64,
        req: UpdateBoardRequest,
    ) -> AppResult<Board> {
        let current = self.get(id).await?;
        if current.is_deleted() {
            return Err(AppError::not_found(messages::ADMIN_BOARD_NOT_FOUND));
        }
        if req.code.as_deref().is_some_and(|code| code.trim() != current.code) {
            return Err(AppError::validation("게시판 코드는 변경할 수 없습니다."));
        }

        let changes = UpdateBoard {
            title: match req.title.as_deref() {
                Some(title) => Some(input::required(title, "게시판 이름을 입력해주세요.")?),
                None => None,
            },
            description: req.description.map(|d| d.trim().to_string()),
            category: match req.category.as_deref() {
                Some(category) => Some(input::required(category, "게시판 분류를 입력해주세요.")?),
                None => None,
            },
        };

        let board = self.board_repo.update(id, &changes).await?;
        info!(admin_id = ctx.user_id, board_id = id, "Board updated");
        Ok(board)
    }

    /// Soft-delete a board, or remove it with all its content when
    /// `permanent` is set.
    pub async fn delete(&self, ctx: &RequestContext, id: i64, permanent: bool) -> AppResult<()> {
        let removed = if permanent {
            self.board_repo.hard_delete(id).await?
        } else {
            self.board_repo.soft_delete(id).await?
        };
        if !removed {
            return Err(AppError::not_found(messages::ADMIN_BOARD_NOT_FOUND));
        }
        info!(admin_id = ctx.user_id, board_id = id, permanent, "Board deleted");
        Ok(())
    }

    /// Bring back a soft-deleted board.
    pub async fn restore(&self, ctx: &RequestContext, id: i64) -> AppResult<Board> {
        let board = self.board_repo.restore(id).await?;
        info!(admin_id = ctx.user_id, board_id = id, "Board restored");
        Ok(board)
    }
}

/// Check a board code: 2 to 32 of lowercase letters, digits, `_`, `-`.
pub fn validate_code(code: &str) -> AppResult<()> {
    if BOARD_CODE.is_match(code) {
        Ok(())
    } else {
        Err(AppError::validation(
            "게시판 코드는 2~32자의 영문 소문자, 숫자, '_', '-'만 사용할 수 있습니다.",
        ))
    }
}
