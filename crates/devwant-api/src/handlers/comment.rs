//! Comment handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use devwant_entity::comment::{Comment, CommentNode};

use crate::dto::request::CreateCommentBody;
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiResult;
use crate::extractors::{AuthUser, Path, ValidatedJson};
use crate::state::AppState;

/// GET /api/boards/{code}/posts/{id}/comments
pub async fn list_comments(
    State(state): State<AppState>,
    Path((code, post_id)): Path<(String, i64)>,
) -> ApiResult<Json<ApiResponse<Vec<CommentNode>>>> {
    let comments = state.comment_service.list(&code, post_id).await?;
    Ok(Json(ApiResponse::ok(comments)))
}

/// POST /api/boards/{code}/posts/{id}/comments
pub async fn create_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((code, post_id)): Path<(String, i64)>,
    ValidatedJson(req): ValidatedJson<CreateCommentBody>,
) -> ApiResult<(StatusCode, Json<ApiResponse<Comment>>)> {
    let comment = state
        .comment_service
        .create(&auth, &code, post_id, req.into())
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(comment))))
}

/// DELETE /api/boards/{code}/posts/{id}/comments/{comment_id}
pub async fn delete_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((code, post_id, comment_id)): Path<(String, i64, i64)>,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    state
        .comment_service
        .delete(&auth, &code, post_id, comment_id)
        .await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "댓글이 삭제되었습니다.",
    ))))
}
