//! Comment repository implementation.

use sqlx::{PgExecutor, PgPool};

use devwant_core::error::AppError;
use devwant_core::messages;
use devwant_core::result::AppResult;
use devwant_entity::comment::{Comment, CreateComment};

use super::db_err;

/// Comment columns with the mentioned user's display name joined in.
const COMMENT_SELECT: &str = "SELECT c.id, c.post_id, c.user_id, c.author, c.content, \
    c.parent_id, c.mentioned_user_id, m.name AS mentioned_user_name, c.created_at \
    FROM comments c LEFT JOIN users m ON m.id = c.mentioned_user_id";

/// Repository for post comments.
#[derive(Debug, Clone)]
pub struct CommentRepository {
    pool: PgPool,
}

impl CommentRepository {
    /// Create a new comment repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All comments of a post, oldest first.
    pub async fn find_by_post(&self, post_id: i64) -> AppResult<Vec<Comment>> {
        sqlx::query_as::<_, Comment>(&format!(
            "{COMMENT_SELECT} WHERE c.post_id = $1 ORDER BY c.created_at ASC, c.id ASC"
        ))
        .bind(post_id)
        .fetch_all(&self.pool)
        .await
        .map_err(db_err("Failed to list comments"))
    }

    /// Find a comment by id.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Comment>> {
        fetch_comment(&self.pool, id).await
    }

    /// Insert a comment and recount the post's comments.
    pub async fn create(&self, data: &CreateComment) -> AppResult<Comment> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(db_err("Failed to begin transaction"))?;

        let id: i64 = sqlx::query_scalar(
            "INSERT INTO comments (post_id, user_id, author, content, parent_id, mentioned_user_id) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING id",
        )
        .bind(data.post_id)
        .bind(data.user_id)
        .bind(&data.author)
        .bind(&data.content)
        .bind(data.parent_id)
        .bind(data.mentioned_user_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(db_err("Failed to create comment"))?;

        recount_comments(&mut *tx, data.post_id).await?;

        let comment = fetch_comment(&mut *tx, id)
            .await?
            .ok_or_else(|| AppError::internal("Inserted comment vanished"))?;

        tx.commit()
            .await
            .map_err(db_err("Failed to commit comment"))?;

        Ok(comment)
    }

    /// Delete a comment (replies cascade) and recount the post's comments.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(db_err("Failed to begin transaction"))?;

        let post_id: i64 = sqlx::query_scalar("DELETE FROM comments WHERE id = $1 RETURNING post_id")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(db_err("Failed to delete comment"))?
            .ok_or_else(|| AppError::not_found(messages::COMMENT_NOT_FOUND))?;

        recount_comments(&mut *tx, post_id).await?;

        tx.commit()
            .await
            .map_err(db_err("Failed to commit comment deletion"))?;
        Ok(())
    }
}

async fn fetch_comment<'e, E>(executor: E, id: i64) -> AppResult<Option<Comment>>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, Comment>(&format!("{COMMENT_SELECT} WHERE c.id = $1"))
        .bind(id)
        .fetch_optional(executor)
        .await
        .map_err(db_err("Failed to find comment"))
}

async fn recount_comments<'e, E>(executor: E, post_id: i64) -> AppResult<()>
where
    E: PgExecutor<'e>,
{
    sqlx::query(
        "UPDATE posts SET comments_count = \
            (SELECT COUNT(*) FROM comments WHERE post_id = $1) \
         WHERE id = $1",
    )
    .bind(post_id)
    .execute(executor)
    .await
    .map_err(db_err("Failed to recount comments"))?;
    Ok(())
}
