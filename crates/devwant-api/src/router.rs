//! Route definitions for the DevWant HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`. Stored
//! thumbnails are served as static files under the configured prefix.

use axum::Router;
use axum::routing::{get, post, put};
use tower_http::services::ServeDir;

use crate::handlers;
use crate::state::AppState;

/// Build the Axum router with every route, threading `AppState` through
/// via `.with_state(state)`. Middleware is added by [`crate::build_app`].
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(health_routes())
        .merge(auth_routes())
        .merge(profile_routes())
        .merge(board_routes())
        .merge(post_routes())
        .merge(admin_routes());

    let thumbs = ServeDir::new(&state.config.thumbnail.directory);
    let thumbs_prefix = normalized_prefix(&state.config.thumbnail.url_prefix);

    Router::new()
        .nest("/api", api_routes)
        .nest_service(&thumbs_prefix, thumbs)
        .with_state(state)
}

/// Liveness and database checks
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/health/detailed", get(handlers::health::health_detailed))
}

/// Social sign-in and token lifecycle
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/providers", get(handlers::auth::providers))
        .route("/auth/{provider}/authorize", get(handlers::auth::authorize))
        .route("/auth/{provider}/callback", post(handlers::auth::callback))
        .route("/auth/refresh", post(handlers::auth::refresh))
        .route("/auth/logout", post(handlers::auth::logout))
        .route("/auth/me", get(handlers::auth::me))
}

/// Current member's profile
fn profile_routes() -> Router<AppState> {
    Router::new().route(
        "/profile",
        get(handlers::profile::get_profile).put(handlers::profile::update_profile),
    )
}

/// Board directory, board pages, and public categories
fn board_routes() -> Router<AppState> {
    Router::new()
        .route("/boards", get(handlers::board::list_boards))
        .route("/boards/{code}", get(handlers::board::get_board))
        .route(
            "/boards/{code}/categories",
            get(handlers::board::list_categories),
        )
}

/// Posts, threads, votes, and comments within a board
fn post_routes() -> Router<AppState> {
    Router::new()
        .route("/boards/{code}/posts", post(handlers::post::create_post))
        .route(
            "/boards/{code}/posts/{id}",
            get(handlers::post::get_post)
                .put(handlers::post::update_post)
                .delete(handlers::post::delete_post),
        )
        .route(
            "/boards/{code}/posts/{id}/thread",
            get(handlers::post::get_thread),
        )
        .route(
            "/boards/{code}/posts/{id}/vote",
            post(handlers::vote::cast_vote),
        )
        .route(
            "/boards/{code}/posts/{id}/comments",
            get(handlers::comment::list_comments).post(handlers::comment::create_comment),
        )
        .route(
            "/boards/{code}/posts/{id}/comments/{comment_id}",
            axum::routing::delete(handlers::comment::delete_comment),
        )
}

/// Admin: boards, categories, users
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/admin/boards",
            get(handlers::admin::boards::list_boards).post(handlers::admin::boards::create_board),
        )
        .route(
            "/admin/boards/{id}",
            get(handlers::admin::boards::get_board)
                .put(handlers::admin::boards::update_board)
                .delete(handlers::admin::boards::delete_board),
        )
        .route(
            "/admin/boards/{id}/restore",
            post(handlers::admin::boards::restore_board),
        )
        .route(
            "/admin/boards/{id}/categories",
            get(handlers::admin::categories::list_categories)
                .post(handlers::admin::categories::create_category),
        )
        .route(
            "/admin/boards/{id}/categories/reorder",
            put(handlers::admin::categories::reorder_categories),
        )
        .route(
            "/admin/boards/{id}/categories/{category_id}",
            put(handlers::admin::categories::update_category)
                .delete(handlers::admin::categories::delete_category),
        )
        .route("/admin/users", get(handlers::admin::users::list_users))
}

/// `nest_service` wants a leading slash and no trailing one.
fn normalized_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim_matches('/');
    if trimmed.is_empty() {
        "/thumbs".to_string()
    } else {
        format!("/{trimmed}")
    }
}
