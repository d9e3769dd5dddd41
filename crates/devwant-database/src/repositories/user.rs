//! User repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use devwant_core::error::{AppError, ErrorKind};
use devwant_core::messages;
use devwant_core::result::AppResult;
use devwant_core::types::pagination::{PageRequest, PageResponse};
use devwant_entity::user::{UpsertUser, User, UserSummary};

use super::db_err;

/// Repository for users created through social sign-in.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a live user by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1 AND deleted_at IS NULL")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err("Failed to find user by id"))
    }

    /// Find a live user by public uuid.
    pub async fn find_by_uuid(&self, uuid: Uuid) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE uuid = $1 AND deleted_at IS NULL")
            .bind(uuid)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err("Failed to find user by uuid"))
    }

    /// Create the user on first sign-in, or touch `updated_at` on later ones.
    ///
    /// Name and avatar of an existing account are left unchanged so that a
    /// name edited on the profile page survives the next sign-in.
    pub async fn upsert_oauth_user(&self, data: &UpsertUser) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (uuid, email, name, image, provider) \
             VALUES ($1, $2, $3, $4, $5) \
             ON CONFLICT (email) DO UPDATE SET updated_at = NOW() \
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(&data.email)
        .bind(&data.name)
        .bind(&data.image)
        .bind(data.provider)
        .fetch_one(&self.pool)
        .await
        .map_err(db_err("Failed to upsert user"))
    }

    /// Change the display name.
    pub async fn update_name(&self, id: i64, name: &str) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "UPDATE users SET name = $2, updated_at = NOW() \
             WHERE id = $1 AND deleted_at IS NULL RETURNING *",
        )
        .bind(id)
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_err("Failed to update user name"))?
        .ok_or_else(|| AppError::not_found(messages::USER_NOT_FOUND))
    }

    /// Whether a live user with this id exists.
    pub async fn exists(&self, id: i64) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM users WHERE id = $1 AND deleted_at IS NULL)",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to check user", e))
    }

    /// List users, newest first.
    pub async fn find_all(&self, page: &PageRequest) -> AppResult<PageResponse<UserSummary>> {
        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE deleted_at IS NULL")
                .fetch_one(&self.pool)
                .await
                .map_err(db_err("Failed to count users"))?;

        let users = sqlx::query_as::<_, UserSummary>(
            "SELECT id, email, name, image, provider, created_at, updated_at \
             FROM users WHERE deleted_at IS NULL \
             ORDER BY created_at DESC, id DESC LIMIT $1 OFFSET $2",
        )
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(db_err("Failed to list users"))?;

        Ok(PageResponse::new(
            users,
            page.page,
            page.page_size,
            total as u64,
        ))
    }
}
