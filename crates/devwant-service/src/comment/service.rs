//! Comment operations.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use devwant_core::error::AppError;
use devwant_core::result::AppResult;
use devwant_database::repositories::{
    BoardRepository, CommentRepository, PostRepository, UserRepository,
};
use devwant_entity::comment::{Comment, CommentNode, CreateComment, build_comment_tree};
use devwant_entity::post::Post;

use crate::board::service::live_board;
use crate::context::RequestContext;
use crate::messages;
use crate::post::service::author_name;

/// Request to comment on a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCommentRequest {
    pub content: String,
    /// Comment being replied to.
    pub parent_id: Option<i64>,
    /// User mentioned with `@name`.
    pub mentioned_user_id: Option<i64>,
}

/// Handles comments on posts.
#[derive(Debug, Clone)]
pub struct CommentService {
    /// Board repository.
    board_repo: Arc<BoardRepository>,
    /// Post repository.
    post_repo: Arc<PostRepository>,
    /// Comment repository.
    comment_repo: Arc<CommentRepository>,
    /// User repository, for mentions.
    user_repo: Arc<UserRepository>,
}

impl CommentService {
    /// Creates a new comment service.
    pub fn new(
        board_repo: Arc<BoardRepository>,
        post_repo: Arc<PostRepository>,
        comment_repo: Arc<CommentRepository>,
        user_repo: Arc<UserRepository>,
    ) -> Self {
        Self {
            board_repo,
            post_repo,
            comment_repo,
            user_repo,
        }
    }

    /// Comments of a post as a reply tree.
    pub async fn list(&self, code: &str, post_id: i64) -> AppResult<Vec<CommentNode>> {
        let post = self.live_post(code, post_id).await?;
        let comments = self.comment_repo.find_by_post(post.id).await?;
        Ok(build_comment_tree(comments))
    }

    /// Comment on a post, optionally replying to a comment and mentioning a user.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        code: &str,
        post_id: i64,
        req: CreateCommentRequest,
    ) -> AppResult<Comment> {
        let content = req.content.trim();
        if content.is_empty() {
            return Err(AppError::validation(messages::COMMENT_CONTENT_REQUIRED));
        }
        let post = self.live_post(code, post_id).await?;

        if let Some(parent_id) = req.parent_id {
            let parent = self.comment_repo.find_by_id(parent_id).await?;
            if !parent.is_some_and(|p| p.post_id == post.id) {
                return Err(AppError::not_found(messages::COMMENT_NOT_FOUND));
            }
        }
        if let Some(mentioned) = req.mentioned_user_id {
            if !self.user_repo.exists(mentioned).await? {
                return Err(AppError::not_found(messages::USER_NOT_FOUND));
            }
        }

        let comment = self
            .comment_repo
            .create(&CreateComment {
                post_id: post.id,
                user_id: ctx.user_id,
                author: author_name(ctx),
                content: content.to_string(),
                parent_id: req.parent_id,
                mentioned_user_id: req.mentioned_user_id,
            })
            .await?;

        info!(
            user_id = ctx.user_id,
            post_id = post.id,
            comment_id = comment.id,
            reply_to = ?comment.parent_id,
            "Comment created"
        );
        Ok(comment)
    }

    /// Delete a comment and its replies. Its author or an admin may do so.
    pub async fn delete(
        &self,
        ctx: &RequestContext,
        code: &str,
        post_id: i64,
        comment_id: i64,
    ) -> AppResult<()> {
        let post = self.live_post(code, post_id).await?;
        let comment = self
            .comment_repo
            .find_by_id(comment_id)
            .await?
            .filter(|c| c.post_id == post.id)
            .ok_or_else(|| AppError::not_found(messages::COMMENT_NOT_FOUND))?;

        if !ctx.can_moderate(comment.user_id) {
            return Err(AppError::authorization(messages::COMMENT_DELETE_FORBIDDEN));
        }

        self.comment_repo.delete(comment.id).await?;
        info!(user_id = ctx.user_id, post_id = post.id, comment_id, "Comment deleted");
        Ok(())
    }

    async fn live_post(&self, code: &str, post_id: i64) -> AppResult<Post> {
        let board = live_board(&self.board_repo, code).await?;
        self.post_repo
            .find_by_id(post_id)
            .await?
            .filter(|post| post.board_id == board.id)
            .ok_or_else(|| AppError::not_found(messages::POST_GONE))
    }
}
