//! Post repository implementation.
//!
//! Posts are listed thread by thread: newest thread first, and inside a
//! thread by `thread_path` under the "C" collation so that the order is a
//! pre-order walk of the reply tree. A post's `sequence` is its rank in
//! that walk and is computed on read, so inserting a reply never
//! renumbers existing rows.

use sqlx::{FromRow, PgExecutor, PgPool, Postgres, QueryBuilder};
use tracing::debug;

use devwant_core::error::{AppError, ErrorKind};
use devwant_core::messages;
use devwant_core::result::AppResult;
use devwant_core::types::pagination::{PageRequest, PageResponse};
use devwant_entity::post::thread;
use devwant_entity::post::{CreatePost, Post, PostListItem, UpdatePost};

use super::{db_err, violated_constraint};

/// Every post column plus the derived in-thread rank.
const RANKED_POSTS: &str = "SELECT p.*, \
    (ROW_NUMBER() OVER (PARTITION BY p.group_id ORDER BY p.thread_path COLLATE \"C\") - 1) \
    AS sequence FROM posts p";

/// Columns of [`PostListItem`].
const LIST_COLUMNS: &str = "ranked.id, ranked.board_id, ranked.user_id, ranked.parent_id, \
    ranked.author, ranked.title, ranked.group_id, ranked.thread_path, ranked.depth, \
    ranked.sequence, ranked.thumbnail, ranked.view_count, ranked.like_count, \
    ranked.dislike_count, ranked.comments_count, ranked.created_at";

/// Thread ordering for listings.
const THREAD_ORDER: &str = " ORDER BY ranked.group_id DESC, ranked.thread_path COLLATE \"C\" ASC";

/// The locked parent row a reply is inserted under.
#[derive(Debug, FromRow)]
struct ParentSlot {
    board_id: i64,
    group_id: i64,
    thread_path: String,
    depth: i32,
    deleted: bool,
}

/// Repository for posts and reply threads.
#[derive(Debug, Clone)]
pub struct PostRepository {
    pool: PgPool,
}

impl PostRepository {
    /// Create a new post repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// One page of a board's live posts in thread order, optionally
    /// restricted to posts whose title or body contains `search`.
    pub async fn list_by_board(
        &self,
        board_id: i64,
        search: Option<&str>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<PostListItem>> {
        let pattern = search.map(like_pattern);

        let mut count_qb: QueryBuilder<'_, Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM posts ranked");
        push_listing_filters(&mut count_qb, board_id, pattern.as_deref());
        let total: i64 = count_qb
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(db_err("Failed to count posts"))?;

        let mut qb: QueryBuilder<'_, Postgres> = QueryBuilder::new(format!(
            "SELECT {LIST_COLUMNS} FROM ({RANKED_POSTS} WHERE p.board_id = "
        ));
        qb.push_bind(board_id).push(") ranked");
        push_listing_filters(&mut qb, board_id, pattern.as_deref());
        qb.push(THREAD_ORDER)
            .push(" LIMIT ")
            .push_bind(page.limit() as i64)
            .push(" OFFSET ")
            .push_bind(page.offset() as i64);

        let items = qb
            .build_query_as::<PostListItem>()
            .fetch_all(&self.pool)
            .await
            .map_err(db_err("Failed to list posts"))?;

        Ok(PageResponse::new(
            items,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Find a live post by id.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Post>> {
        fetch_ranked(&self.pool, id).await
    }

    /// All live posts of a thread in display order.
    pub async fn find_thread(&self, group_id: i64) -> AppResult<Vec<PostListItem>> {
        sqlx::query_as::<_, PostListItem>(&format!(
            "SELECT {LIST_COLUMNS} FROM ({RANKED_POSTS} WHERE p.group_id = $1) ranked \
             WHERE ranked.deleted_at IS NULL{THREAD_ORDER}"
        ))
        .bind(group_id)
        .fetch_all(&self.pool)
        .await
        .map_err(db_err("Failed to load thread"))
    }

    /// Insert a post that starts a new thread.
    ///
    /// The id is reserved first so the row is written with
    /// `group_id = id` in a single insert.
    pub async fn create_root(&self, data: &CreatePost) -> AppResult<Post> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(db_err("Failed to begin transaction"))?;

        let id: i64 = sqlx::query_scalar("SELECT nextval(pg_get_serial_sequence('posts', 'id'))")
            .fetch_one(&mut *tx)
            .await
            .map_err(db_err("Failed to reserve post id"))?;

        sqlx::query(
            "INSERT INTO posts \
                (id, board_id, user_id, parent_id, author, title, content, \
                 group_id, reply_order, thread_path, depth, thumbnail) \
             VALUES ($1, $2, $3, NULL, $4, $5, $6, $1, 0, '', 0, $7)",
        )
        .bind(id)
        .bind(data.board_id)
        .bind(data.user_id)
        .bind(&data.author)
        .bind(&data.title)
        .bind(&data.content)
        .bind(&data.thumbnail)
        .execute(&mut *tx)
        .await
        .map_err(db_err("Failed to create post"))?;

        recount_board_posts(&mut *tx, data.board_id).await?;

        let post = fetch_ranked(&mut *tx, id)
            .await?
            .ok_or_else(|| AppError::internal("Inserted post vanished"))?;

        tx.commit()
            .await
            .map_err(db_err("Failed to commit post"))?;

        Ok(post)
    }

    /// Insert a reply directly below `parent_id`.
    ///
    /// The parent row is locked for the duration of the transaction, so
    /// concurrent replies to one parent take distinct ordinals.
    pub async fn create_reply(&self, parent_id: i64, data: &CreatePost) -> AppResult<Post> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(db_err("Failed to begin transaction"))?;

        let parent = sqlx::query_as::<_, ParentSlot>(
            "SELECT board_id, group_id, thread_path, depth, deleted_at IS NOT NULL AS deleted \
             FROM posts WHERE id = $1 FOR UPDATE",
        )
        .bind(parent_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(db_err("Failed to lock parent post"))?
        .filter(|p| !p.deleted && p.board_id == data.board_id)
        .ok_or_else(|| AppError::not_found(messages::PARENT_POST_NOT_FOUND))?;

        let last_order: i32 = sqlx::query_scalar(
            "SELECT COALESCE(MAX(reply_order), 0) FROM posts WHERE parent_id = $1",
        )
        .bind(parent_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(db_err("Failed to read reply order"))?;

        let reply_order = last_order + 1;
        let path = thread::child_path(&parent.thread_path, reply_order)?;
        let depth = parent.depth + 1;
        debug!(parent_id, reply_order, path = %path, depth, "Placing reply");

        let id: i64 = sqlx::query_scalar(
            "INSERT INTO posts \
                (board_id, user_id, parent_id, author, title, content, \
                 group_id, reply_order, thread_path, depth, thumbnail) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) RETURNING id",
        )
        .bind(data.board_id)
        .bind(data.user_id)
        .bind(parent_id)
        .bind(&data.author)
        .bind(&data.title)
        .bind(&data.content)
        .bind(parent.group_id)
        .bind(reply_order)
        .bind(&path)
        .bind(depth)
        .bind(&data.thumbnail)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| match violated_constraint(&e) {
            Some("posts_thread_position_key") => {
                AppError::conflict(messages::REPLY_POSITION_TAKEN)
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create reply", e),
        })?;

        recount_board_posts(&mut *tx, data.board_id).await?;

        let post = fetch_ranked(&mut *tx, id)
            .await?
            .ok_or_else(|| AppError::internal("Inserted reply vanished"))?;

        tx.commit()
            .await
            .map_err(db_err("Failed to commit reply"))?;

        Ok(post)
    }

    /// Replace title, body, and thumbnail of a live post.
    pub async fn update(&self, id: i64, data: &UpdatePost) -> AppResult<Post> {
        let updated = sqlx::query(
            "UPDATE posts SET title = $2, content = $3, thumbnail = $4, updated_at = NOW() \
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .bind(&data.title)
        .bind(&data.content)
        .bind(&data.thumbnail)
        .execute(&self.pool)
        .await
        .map_err(db_err("Failed to update post"))?;

        if updated.rows_affected() == 0 {
            return Err(AppError::not_found(messages::POST_NOT_FOUND));
        }

        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(messages::POST_NOT_FOUND))
    }

    /// Soft-delete a post and recount its board.
    ///
    /// Replies stay in place; thread views attach them to the nearest
    /// remaining ancestor.
    pub async fn soft_delete(&self, id: i64) -> AppResult<()> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(db_err("Failed to begin transaction"))?;

        let board_id: i64 = sqlx::query_scalar(
            "UPDATE posts SET deleted_at = NOW(), updated_at = NOW() \
             WHERE id = $1 AND deleted_at IS NULL RETURNING board_id",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(db_err("Failed to delete post"))?
        .ok_or_else(|| AppError::not_found(messages::POST_NOT_FOUND))?;

        recount_board_posts(&mut *tx, board_id).await?;

        tx.commit()
            .await
            .map_err(db_err("Failed to commit post deletion"))?;
        Ok(())
    }

    /// Count a view and return the new total.
    pub async fn increment_views(&self, id: i64) -> AppResult<i64> {
        sqlx::query_scalar(
            "UPDATE posts SET view_count = view_count + 1 \
             WHERE id = $1 AND deleted_at IS NULL RETURNING view_count",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_err("Failed to count view"))?
        .ok_or_else(|| AppError::not_found(messages::POST_NOT_FOUND))
    }
}

/// Load a live post with its derived sequence.
async fn fetch_ranked<'e, E>(executor: E, id: i64) -> AppResult<Option<Post>>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, Post>(&format!(
        "SELECT ranked.* FROM ( \
            {RANKED_POSTS} WHERE p.group_id = (SELECT group_id FROM posts WHERE id = $1) \
         ) ranked WHERE ranked.id = $1 AND ranked.deleted_at IS NULL"
    ))
    .bind(id)
    .fetch_optional(executor)
    .await
    .map_err(db_err("Failed to find post"))
}

/// Store the live post count of a board.
pub(crate) async fn recount_board_posts<'e, E>(executor: E, board_id: i64) -> AppResult<()>
where
    E: PgExecutor<'e>,
{
    sqlx::query(
        "UPDATE boards SET posts_count = \
            (SELECT COUNT(*) FROM posts WHERE board_id = $1 AND deleted_at IS NULL) \
         WHERE id = $1",
    )
    .bind(board_id)
    .execute(executor)
    .await
    .map_err(db_err("Failed to recount board posts"))?;
    Ok(())
}

/// Shared WHERE clause of the listing and its count.
fn push_listing_filters<'a>(
    qb: &mut QueryBuilder<'a, Postgres>,
    board_id: i64,
    pattern: Option<&'a str>,
) {
    qb.push(" WHERE ranked.board_id = ")
        .push_bind(board_id)
        .push(" AND ranked.deleted_at IS NULL");
    if let Some(pattern) = pattern {
        qb.push(" AND (ranked.title ILIKE ")
            .push_bind(pattern)
            .push(" ESCAPE '\\' OR ranked.content ILIKE ")
            .push_bind(pattern)
            .push(" ESCAPE '\\')");
    }
}

/// Build an `ILIKE` pattern matching `term` literally anywhere.
fn like_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for ch in term.trim().chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped.push('%');
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("rust"), "%rust%");
        assert_eq!(like_pattern(" 100%_done "), "%100\\%\\_done%");
        assert_eq!(like_pattern("a\\b"), "%a\\\\b%");
    }

    #[test]
    fn test_listing_filters_bind_search_twice() {
        let mut qb: QueryBuilder<'_, Postgres> = QueryBuilder::new("SELECT 1 FROM posts ranked");
        push_listing_filters(&mut qb, 7, Some("%x%"));
        let sql = qb.sql();
        assert!(sql.contains("ranked.board_id = $1"));
        assert!(sql.contains("ranked.title ILIKE $2"));
        assert!(sql.contains("ranked.content ILIKE $3"));
    }

    #[test]
    fn test_ranked_query_orders_by_path_bytes() {
        assert!(RANKED_POSTS.contains("PARTITION BY p.group_id"));
        assert!(RANKED_POSTS.contains("COLLATE \"C\""));
    }
}
