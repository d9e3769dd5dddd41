//! Application builder: wires repositories, auth, and services into
//! `AppState`, and the router plus middleware into an Axum app.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware as axum_middleware;
use tower_http::compression::CompressionLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use devwant_auth::{AdminPolicy, JwtDecoder, JwtEncoder, OAuthRegistry, StateStore, TokenBlocklist};
use devwant_core::config::AppConfig;
use devwant_core::error::{AppError, ErrorKind};
use devwant_core::result::AppResult;
use devwant_database::DatabasePool;
use devwant_database::repositories::{
    BoardRepository, CategoryRepository, CommentRepository, PostRepository, UserRepository,
    VoteRepository,
};
use devwant_service::{
    AuthService, BoardAdminService, BoardService, CategoryService, CommentService, PostService,
    ThumbnailService, UserService, VoteService,
};

use crate::middleware::cors::build_cors_layer;
use crate::middleware::logging::request_logging;
use crate::router::build_router;
use crate::state::AppState;

/// Timeout for calls to OAuth providers.
const OAUTH_HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    let body_limit = state.config.server.body_limit_bytes;
    let cors = build_cors_layer(&state.config.server.cors);

    build_router(state)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(request_logging))
}

/// Construct every repository and service over one pool, with the OAuth
/// providers enabled in configuration.
pub fn build_state(config: AppConfig, db: DatabasePool) -> AppResult<AppState> {
    let http = reqwest::Client::builder()
        .timeout(OAUTH_HTTP_TIMEOUT)
        .user_agent(concat!("devwant/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| AppError::with_source(ErrorKind::Configuration, "Failed to build HTTP client", e))?;
    let registry = OAuthRegistry::from_config(&config.oauth, http);
    Ok(build_state_with_providers(config, db, registry))
}

/// Like [`build_state`], with an explicit provider registry.
pub fn build_state_with_providers(
    config: AppConfig,
    db: DatabasePool,
    registry: OAuthRegistry,
) -> AppState {
    let pool = db.pool().clone();

    // ── Repositories ─────────────────────────────────────────────
    let user_repo = Arc::new(UserRepository::new(pool.clone()));
    let board_repo = Arc::new(BoardRepository::new(pool.clone()));
    let category_repo = Arc::new(CategoryRepository::new(pool.clone()));
    let post_repo = Arc::new(PostRepository::new(pool.clone()));
    let comment_repo = Arc::new(CommentRepository::new(pool.clone()));
    let vote_repo = Arc::new(VoteRepository::new(pool));

    // ── Auth ─────────────────────────────────────────────────────
    let blocklist = TokenBlocklist::new(config.auth.jwt_refresh_ttl_hours * 3600);
    let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
    let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth, blocklist.clone()));
    let admins = Arc::new(AdminPolicy::from_config(&config.auth));
    let states = Arc::new(StateStore::new(config.auth.oauth_state_ttl_seconds));
    let registry = Arc::new(registry);

    tracing::info!(
        providers = ?registry.enabled(),
        admins = admins.len(),
        "Authentication configured"
    );

    // ── Services ─────────────────────────────────────────────────
    let thumbnails = Arc::new(ThumbnailService::new(&config.thumbnail));

    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&user_repo),
        registry,
        states,
        jwt_encoder,
        Arc::clone(&jwt_decoder),
        Arc::new(blocklist),
        admins,
    ));
    let user_service = Arc::new(UserService::new(Arc::clone(&user_repo)));
    let board_service = Arc::new(BoardService::new(
        Arc::clone(&board_repo),
        Arc::clone(&category_repo),
        Arc::clone(&post_repo),
    ));
    let board_admin_service = Arc::new(BoardAdminService::new(Arc::clone(&board_repo)));
    let category_service = Arc::new(CategoryService::new(
        Arc::clone(&board_repo),
        category_repo,
    ));
    let post_service = Arc::new(PostService::new(
        Arc::clone(&board_repo),
        Arc::clone(&post_repo),
        Arc::clone(&vote_repo),
        thumbnails,
    ));
    let comment_service = Arc::new(CommentService::new(
        Arc::clone(&board_repo),
        Arc::clone(&post_repo),
        comment_repo,
        user_repo,
    ));
    let vote_service = Arc::new(VoteService::new(board_repo, post_repo, vote_repo));

    AppState {
        config: Arc::new(config),
        db,
        jwt_decoder,
        auth_service,
        user_service,
        board_service,
        board_admin_service,
        category_service,
        post_service,
        comment_service,
        vote_service,
    }
}
