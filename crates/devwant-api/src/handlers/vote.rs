//! Vote handler.

use axum::Json;
use axum::extract::State;

use devwant_entity::vote::VoteSummary;

use crate::dto::request::VoteRequest;
use crate::dto::response::ApiResponse;
use crate::error::ApiResult;
use crate::extractors::{AuthUser, Path, ValidatedJson};
use crate::state::AppState;

/// POST /api/boards/{code}/posts/{id}/vote
pub async fn cast_vote(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((code, post_id)): Path<(String, i64)>,
    ValidatedJson(req): ValidatedJson<VoteRequest>,
) -> ApiResult<Json<ApiResponse<VoteSummary>>> {
    let summary = state
        .vote_service
        .cast(&auth, &code, post_id, req.vote_type)
        .await?;
    Ok(Json(ApiResponse::ok(summary)))
}
