//! Admin user listing.

use axum::Json;
use axum::extract::{Query, State};

use devwant_core::types::pagination::PageResponse;
use devwant_entity::user::UserSummary;

use crate::dto::response::ApiResponse;
use crate::error::ApiResult;
use crate::extractors::{AuthUser, PaginationParams};
use crate::middleware::rbac::require_admin;
use crate::state::AppState;

/// GET /api/admin/users
pub async fn list_users(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<PaginationParams>,
) -> ApiResult<Json<ApiResponse<PageResponse<UserSummary>>>> {
    require_admin(&auth)?;
    let users = state
        .user_service
        .list_users(params.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(users)))
}
