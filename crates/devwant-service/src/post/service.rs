//! Post operations: writing, replying, reading, editing, and deleting.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use devwant_core::error::AppError;
use devwant_core::result::AppResult;
use devwant_database::repositories::{BoardRepository, PostRepository, VoteRepository};
use devwant_entity::board::Board;
use devwant_entity::post::{CreatePost, Post, ThreadNode, UpdatePost, build_thread};
use devwant_entity::vote::VoteType;

use super::thumbnail::ThumbnailService;
use crate::board::service::live_board;
use crate::context::RequestContext;
use crate::messages;

/// Request to write a post or, with `parent_id`, a reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    pub parent_id: Option<i64>,
}

/// Request to edit a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    pub title: String,
    pub content: String,
}

/// A post together with the viewer's vote on it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDetail {
    #[serde(flatten)]
    pub post: Post,
    /// `None` for anonymous viewers and users who have not voted.
    pub user_vote: Option<VoteType>,
}

/// Orchestrates post writes and reads within a board.
#[derive(Debug, Clone)]
pub struct PostService {
    /// Board repository.
    board_repo: Arc<BoardRepository>,
    /// Post repository.
    post_repo: Arc<PostRepository>,
    /// Vote repository.
    vote_repo: Arc<VoteRepository>,
    /// Thumbnail storage.
    thumbnails: Arc<ThumbnailService>,
}

impl PostService {
    /// Creates a new post service.
    pub fn new(
        board_repo: Arc<BoardRepository>,
        post_repo: Arc<PostRepository>,
        vote_repo: Arc<VoteRepository>,
        thumbnails: Arc<ThumbnailService>,
    ) -> Self {
        Self {
            board_repo,
            post_repo,
            vote_repo,
            thumbnails,
        }
    }

    /// Write a new thread, or a reply when `parent_id` is set.
    pub async fn create_post(
        &self,
        ctx: &RequestContext,
        code: &str,
        req: CreatePostRequest,
    ) -> AppResult<Post> {
        let board = live_board(&self.board_repo, code).await?;
        let (title, content) = title_and_content(&req.title, &req.content)?;
        let thumbnail = self.thumbnails.extract_and_store(&content).await?;

        let data = CreatePost {
            board_id: board.id,
            user_id: ctx.user_id,
            author: author_name(ctx),
            title,
            content,
            parent_id: req.parent_id,
            thumbnail,
        };

        let created = match data.parent_id {
            Some(parent_id) => self.post_repo.create_reply(parent_id, &data).await,
            None => self.post_repo.create_root(&data).await,
        };
        let post = match created {
            Ok(post) => post,
            Err(e) => {
                self.discard_thumbnail(data.thumbnail.as_deref()).await;
                return Err(e);
            }
        };

        info!(
            user_id = ctx.user_id,
            board = %board.code,
            post_id = post.id,
            group_id = post.group_id,
            depth = post.depth,
            "Post created"
        );
        Ok(post)
    }

    /// Read a post, counting the view.
    pub async fn get_post(
        &self,
        ctx: Option<&RequestContext>,
        code: &str,
        id: i64,
    ) -> AppResult<PostDetail> {
        let board = live_board(&self.board_repo, code).await?;
        let mut post = self.find_in_board(&board, id).await?;

        post.view_count = self.post_repo.increment_views(post.id).await?;

        let user_vote = match ctx {
            Some(ctx) => self.vote_repo.find_user_vote(post.id, ctx.user_id).await?,
            None => None,
        };

        Ok(PostDetail { post, user_vote })
    }

    /// The whole reply thread a post belongs to, as a tree.
    pub async fn get_thread(&self, code: &str, id: i64) -> AppResult<Vec<ThreadNode>> {
        let board = live_board(&self.board_repo, code).await?;
        let post = self.find_in_board(&board, id).await?;

        let rows = self.post_repo.find_thread(post.group_id).await?;
        build_thread(rows)
    }

    /// Edit a post. Only its author may do so.
    pub async fn update_post(
        &self,
        ctx: &RequestContext,
        code: &str,
        id: i64,
        req: UpdatePostRequest,
    ) -> AppResult<Post> {
        let board = live_board(&self.board_repo, code).await?;
        let existing = self.find_in_board(&board, id).await?;
        if !ctx.owns(existing.user_id) {
            return Err(AppError::authorization(messages::POST_EDIT_FORBIDDEN));
        }

        let (title, content) = title_and_content(&req.title, &req.content)?;
        let thumbnail = self.thumbnails.extract_and_store(&content).await?;

        let updated = self
            .post_repo
            .update(
                id,
                &UpdatePost {
                    title,
                    content,
                    thumbnail: thumbnail.clone(),
                },
            )
            .await;
        let post = match updated {
            Ok(post) => post,
            Err(e) => {
                self.discard_thumbnail(thumbnail.as_deref()).await;
                return Err(e);
            }
        };

        if existing.thumbnail != post.thumbnail {
            self.discard_thumbnail(existing.thumbnail.as_deref()).await;
        }

        info!(user_id = ctx.user_id, post_id = id, "Post updated");
        Ok(post)
    }

    /// Soft-delete a post. Its author or an admin may do so.
    pub async fn delete_post(&self, ctx: &RequestContext, code: &str, id: i64) -> AppResult<()> {
        let board = live_board(&self.board_repo, code).await?;
        let post = self.find_in_board(&board, id).await?;
        if !ctx.can_moderate(post.user_id) {
            return Err(AppError::authorization(messages::POST_DELETE_FORBIDDEN));
        }

        self.post_repo.soft_delete(id).await?;
        info!(user_id = ctx.user_id, post_id = id, admin = ctx.is_admin(), "Post deleted");
        Ok(())
    }

    async fn find_in_board(&self, board: &Board, id: i64) -> AppResult<Post> {
        find_post_in_board(&self.post_repo, board, id).await
    }

    async fn discard_thumbnail(&self, url: Option<&str>) {
        let Some(url) = url else { return };
        if let Err(e) = self.thumbnails.delete(url).await {
            warn!(url = %url, error = %e, "Failed to remove thumbnail");
        }
    }
}

/// A live post of `board`, or the "no such post" error.
pub(crate) async fn find_post_in_board(
    repo: &PostRepository,
    board: &Board,
    id: i64,
) -> AppResult<Post> {
    repo.find_by_id(id)
        .await?
        .filter(|post| post.board_id == board.id)
        .ok_or_else(|| AppError::not_found(messages::POST_NOT_FOUND))
}

/// Trimmed title and content, both required.
fn title_and_content(title: &str, content: &str) -> AppResult<(String, String)> {
    let (title, content) = (title.trim(), content.trim());
    if title.is_empty() || content.is_empty() {
        return Err(AppError::validation(messages::POST_TITLE_CONTENT_REQUIRED));
    }
    Ok((title.to_string(), content.to_string()))
}

/// Display name recorded on posts and comments.
pub(crate) fn author_name(ctx: &RequestContext) -> String {
    let name = ctx.name.trim();
    if name.is_empty() {
        messages::ANONYMOUS.to_string()
    } else {
        name.to_string()
    }
}
