//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use devwant_auth::jwt::JwtDecoder;
use devwant_core::config::AppConfig;
use devwant_database::DatabasePool;
use devwant_service::{
    AuthService, BoardAdminService, BoardService, CategoryService, CommentService, PostService,
    UserService, VoteService,
};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// PostgreSQL connection pool
    pub db: DatabasePool,

    // ── Auth ─────────────────────────────────────────────────
    /// JWT token decoder and validator
    pub jwt_decoder: Arc<JwtDecoder>,

    // ── Services ─────────────────────────────────────────────
    /// Social sign-in and token lifecycle
    pub auth_service: Arc<AuthService>,
    /// Profile and member listing
    pub user_service: Arc<UserService>,
    /// Public board pages
    pub board_service: Arc<BoardService>,
    /// Board administration
    pub board_admin_service: Arc<BoardAdminService>,
    /// Category administration
    pub category_service: Arc<CategoryService>,
    /// Posts and reply threads
    pub post_service: Arc<PostService>,
    /// Comments
    pub comment_service: Arc<CommentService>,
    /// Likes and dislikes
    pub vote_service: Arc<VoteService>,
}
