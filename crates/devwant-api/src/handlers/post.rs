//! Post handlers: write, reply, read, thread, edit, delete.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use devwant_entity::post::{Post, ThreadNode};
use devwant_service::post::PostDetail;

use crate::dto::request::{CreatePostBody, UpdatePostBody};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiResult;
use crate::extractors::{AuthUser, MaybeAuthUser, Path, ValidatedJson};
use crate::state::AppState;

/// POST /api/boards/{code}/posts
pub async fn create_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(code): Path<String>,
    ValidatedJson(req): ValidatedJson<CreatePostBody>,
) -> ApiResult<(StatusCode, Json<ApiResponse<Post>>)> {
    let post = state
        .post_service
        .create_post(&auth, &code, req.into())
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(post))))
}

/// GET /api/boards/{code}/posts/{id}
pub async fn get_post(
    State(state): State<AppState>,
    viewer: MaybeAuthUser,
    Path((code, id)): Path<(String, i64)>,
) -> ApiResult<Json<ApiResponse<PostDetail>>> {
    let detail = state
        .post_service
        .get_post(viewer.context(), &code, id)
        .await?;
    Ok(Json(ApiResponse::ok(detail)))
}

/// GET /api/boards/{code}/posts/{id}/thread
pub async fn get_thread(
    State(state): State<AppState>,
    Path((code, id)): Path<(String, i64)>,
) -> ApiResult<Json<ApiResponse<Vec<ThreadNode>>>> {
    let thread = state.post_service.get_thread(&code, id).await?;
    Ok(Json(ApiResponse::ok(thread)))
}

/// PUT /api/boards/{code}/posts/{id}
pub async fn update_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((code, id)): Path<(String, i64)>,
    ValidatedJson(req): ValidatedJson<UpdatePostBody>,
) -> ApiResult<Json<ApiResponse<Post>>> {
    let post = state
        .post_service
        .update_post(&auth, &code, id, req.into())
        .await?;
    Ok(Json(ApiResponse::ok(post)))
}

/// DELETE /api/boards/{code}/posts/{id}
pub async fn delete_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((code, id)): Path<(String, i64)>,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    state.post_service.delete_post(&auth, &code, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "게시글이 삭제되었습니다.",
    ))))
}
