//! Profile handlers.

use axum::Json;
use axum::extract::State;

use crate::dto::request::UpdateProfileRequest;
use crate::dto::response::{ApiResponse, ProfileResponse};
use crate::error::ApiResult;
use crate::extractors::{AuthUser, ValidatedJson};
use crate::state::AppState;

/// GET /api/profile
pub async fn get_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ApiResponse<ProfileResponse>>> {
    let user = state.user_service.profile(&auth).await?;
    Ok(Json(ApiResponse::ok(user.into())))
}

/// PUT /api/profile
pub async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<UpdateProfileRequest>,
) -> ApiResult<Json<ApiResponse<ProfileResponse>>> {
    let user = state.user_service.update_name(&auth, &req.name).await?;
    Ok(Json(ApiResponse::ok(user.into())))
}
