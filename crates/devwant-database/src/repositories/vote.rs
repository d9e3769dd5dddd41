//! Vote repository implementation.

use sqlx::PgPool;
use tracing::debug;

use devwant_core::error::AppError;
use devwant_core::messages;
use devwant_core::result::AppResult;
use devwant_entity::vote::{Vote, VoteAction, VoteSummary, VoteType};

use super::db_err;

/// Repository for likes and dislikes.
#[derive(Debug, Clone)]
pub struct VoteRepository {
    pool: PgPool,
}

impl VoteRepository {
    /// Create a new vote repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// The user's current vote on a post.
    pub async fn find_user_vote(&self, post_id: i64, user_id: i64) -> AppResult<Option<VoteType>> {
        let vote = sqlx::query_as::<_, Vote>(
            "SELECT * FROM votes WHERE post_id = $1 AND user_id = $2",
        )
        .bind(post_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_err("Failed to find vote"))?;

        Ok(vote.map(|v| v.kind()))
    }

    /// Cast, flip, or withdraw a vote.
    ///
    /// The post row is locked first, so concurrent votes on one post apply
    /// one after another and the stored counts always equal the vote rows.
    pub async fn cast(
        &self,
        post_id: i64,
        user_id: i64,
        requested: VoteType,
    ) -> AppResult<VoteSummary> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(db_err("Failed to begin transaction"))?;

        sqlx::query_scalar::<_, i64>(
            "SELECT id FROM posts WHERE id = $1 AND deleted_at IS NULL FOR UPDATE",
        )
        .bind(post_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(db_err("Failed to lock post"))?
        .ok_or_else(|| AppError::not_found(messages::POST_NOT_FOUND))?;

        let existing = sqlx::query_as::<_, Vote>(
            "SELECT * FROM votes WHERE post_id = $1 AND user_id = $2",
        )
        .bind(post_id)
        .bind(user_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(db_err("Failed to read vote"))?;

        let action = VoteAction::resolve(existing.as_ref().map(Vote::kind), requested);
        debug!(post_id, user_id, vote = %requested, ?action, "Applying vote");

        match (action, existing) {
            (VoteAction::Cancelled, Some(vote)) => {
                sqlx::query("DELETE FROM votes WHERE id = $1")
                    .bind(vote.id)
                    .execute(&mut *tx)
                    .await
                    .map_err(db_err("Failed to withdraw vote"))?;
            }
            (VoteAction::Changed, Some(vote)) => {
                sqlx::query("UPDATE votes SET vote_type = $2, created_at = NOW() WHERE id = $1")
                    .bind(vote.id)
                    .bind(requested.as_bool())
                    .execute(&mut *tx)
                    .await
                    .map_err(db_err("Failed to change vote"))?;
            }
            _ => {
                sqlx::query("INSERT INTO votes (post_id, user_id, vote_type) VALUES ($1, $2, $3)")
                    .bind(post_id)
                    .bind(user_id)
                    .bind(requested.as_bool())
                    .execute(&mut *tx)
                    .await
                    .map_err(db_err("Failed to insert vote"))?;
            }
        }

        let (like_count, dislike_count): (i64, i64) = sqlx::query_as(
            "UPDATE posts SET \
                like_count = (SELECT COUNT(*) FROM votes WHERE post_id = $1 AND vote_type), \
                dislike_count = (SELECT COUNT(*) FROM votes WHERE post_id = $1 AND NOT vote_type) \
             WHERE id = $1 RETURNING like_count, dislike_count",
        )
        .bind(post_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(db_err("Failed to recount votes"))?;

        tx.commit()
            .await
            .map_err(db_err("Failed to commit vote"))?;

        Ok(VoteSummary {
            like_count,
            dislike_count,
            user_vote: action.resulting_vote(requested),
            action,
        })
    }
}
