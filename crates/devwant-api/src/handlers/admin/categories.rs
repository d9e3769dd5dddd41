//! Admin category handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use devwant_entity::category::Category;

use crate::dto::request::{CreateCategoryBody, ReorderCategoriesRequest, UpdateCategoryBody};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiResult;
use crate::extractors::{AuthUser, Path, ValidatedJson};
use crate::middleware::rbac::require_admin;
use crate::state::AppState;

/// GET /api/admin/boards/{id}/categories
pub async fn list_categories(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(board_id): Path<i64>,
) -> ApiResult<Json<ApiResponse<Vec<Category>>>> {
    require_admin(&auth)?;
    let categories = state.category_service.list(board_id).await?;
    Ok(Json(ApiResponse::ok(categories)))
}

/// POST /api/admin/boards/{id}/categories
pub async fn create_category(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(board_id): Path<i64>,
    ValidatedJson(req): ValidatedJson<CreateCategoryBody>,
) -> ApiResult<(StatusCode, Json<ApiResponse<Category>>)> {
    require_admin(&auth)?;
    let category = state
        .category_service
        .create(&auth, board_id, &req.name, req.description.as_deref())
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(category))))
}

/// PUT /api/admin/boards/{id}/categories/{category_id}
pub async fn update_category(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((board_id, category_id)): Path<(i64, i64)>,
    ValidatedJson(req): ValidatedJson<UpdateCategoryBody>,
) -> ApiResult<Json<ApiResponse<Category>>> {
    require_admin(&auth)?;
    let category = state
        .category_service
        .update(
            &auth,
            board_id,
            category_id,
            req.name.as_deref(),
            req.description.as_deref(),
        )
        .await?;
    Ok(Json(ApiResponse::ok(category)))
}

/// DELETE /api/admin/boards/{id}/categories/{category_id}
pub async fn delete_category(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((board_id, category_id)): Path<(i64, i64)>,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    require_admin(&auth)?;
    state
        .category_service
        .delete(&auth, board_id, category_id)
        .await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "카테고리가 삭제되었습니다.",
    ))))
}

/// PUT /api/admin/boards/{id}/categories/reorder
pub async fn reorder_categories(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(board_id): Path<i64>,
    ValidatedJson(req): ValidatedJson<ReorderCategoriesRequest>,
) -> ApiResult<Json<ApiResponse<Vec<Category>>>> {
    require_admin(&auth)?;
    let categories = state
        .category_service
        .reorder(&auth, board_id, &req.categories)
        .await?;
    Ok(Json(ApiResponse::ok(categories)))
}
