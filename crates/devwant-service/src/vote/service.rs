//! Vote casting.

use std::sync::Arc;

use tracing::info;

use devwant_core::result::AppResult;
use devwant_database::repositories::{BoardRepository, PostRepository, VoteRepository};
use devwant_entity::vote::{VoteSummary, VoteType};

use crate::board::service::live_board;
use crate::context::RequestContext;
use crate::post::service::find_post_in_board;

/// Applies likes and dislikes.
#[derive(Debug, Clone)]
pub struct VoteService {
    /// Board repository.
    board_repo: Arc<BoardRepository>,
    /// Post repository.
    post_repo: Arc<PostRepository>,
    /// Vote repository.
    vote_repo: Arc<VoteRepository>,
}

impl VoteService {
    /// Creates a new vote service.
    pub fn new(
        board_repo: Arc<BoardRepository>,
        post_repo: Arc<PostRepository>,
        vote_repo: Arc<VoteRepository>,
    ) -> Self {
        Self {
            board_repo,
            post_repo,
            vote_repo,
        }
    }

    /// Cast a vote. Repeating the same vote withdraws it; the opposite
    /// vote replaces it.
    pub async fn cast(
        &self,
        ctx: &RequestContext,
        code: &str,
        post_id: i64,
        vote_type: VoteType,
    ) -> AppResult<VoteSummary> {
        let board = live_board(&self.board_repo, code).await?;
        let post = find_post_in_board(&self.post_repo, &board, post_id).await?;

        let summary = self.vote_repo.cast(post.id, ctx.user_id, vote_type).await?;
        info!(
            user_id = ctx.user_id,
            post_id = post.id,
            vote = %vote_type,
            action = ?summary.action,
            likes = summary.like_count,
            dislikes = summary.dislike_count,
            "Vote applied"
        );
        Ok(summary)
    }
}
