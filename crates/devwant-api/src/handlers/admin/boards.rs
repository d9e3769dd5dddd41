//! Admin board management handlers.

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;

use devwant_entity::board::Board;

use crate::dto::request::{CreateBoardBody, DeleteBoardQuery, UpdateBoardBody};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiResult;
use crate::extractors::{AuthUser, Path, ValidatedJson};
use crate::middleware::rbac::require_admin;
use crate::state::AppState;

/// GET /api/admin/boards
pub async fn list_boards(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ApiResponse<Vec<Board>>>> {
    require_admin(&auth)?;
    let boards = state.board_admin_service.list_all().await?;
    Ok(Json(ApiResponse::ok(boards)))
}

/// POST /api/admin/boards
pub async fn create_board(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CreateBoardBody>,
) -> ApiResult<(StatusCode, Json<ApiResponse<Board>>)> {
    require_admin(&auth)?;
    let board = state.board_admin_service.create(&auth, req.into()).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(board))))
}

/// GET /api/admin/boards/{id}
pub async fn get_board(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<ApiResponse<Board>>> {
    require_admin(&auth)?;
    let board = state.board_admin_service.get(id).await?;
    Ok(Json(ApiResponse::ok(board)))
}

/// PUT /api/admin/boards/{id}
pub async fn update_board(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
    ValidatedJson(req): ValidatedJson<UpdateBoardBody>,
) -> ApiResult<Json<ApiResponse<Board>>> {
    require_admin(&auth)?;
    let board = state
        .board_admin_service
        .update(&auth, id, req.into())
        .await?;
    Ok(Json(ApiResponse::ok(board)))
}

/// DELETE /api/admin/boards/{id}?permanent=
pub async fn delete_board(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
    Query(query): Query<DeleteBoardQuery>,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    require_admin(&auth)?;
    state
        .board_admin_service
        .delete(&auth, id, query.permanent)
        .await?;

    let message = if query.permanent {
        "게시판이 영구 삭제되었습니다."
    } else {
        "게시판이 삭제되었습니다."
    };
    Ok(Json(ApiResponse::ok(MessageResponse::new(message))))
}

/// POST /api/admin/boards/{id}/restore
pub async fn restore_board(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<ApiResponse<Board>>> {
    require_admin(&auth)?;
    let board = state.board_admin_service.restore(&auth, id).await?;
    Ok(Json(ApiResponse::ok(board)))
}
