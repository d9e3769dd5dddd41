//! Public board handlers.

use axum::Json;
use axum::extract::{Query, State};

use devwant_entity::board::Board;
use devwant_entity::category::Category;
use devwant_service::board::BoardPage;

use crate::dto::request::BoardListQuery;
use crate::dto::response::ApiResponse;
use crate::error::ApiResult;
use crate::extractors::{BoardPageParams, Path};
use crate::state::AppState;

/// GET /api/boards?category=
pub async fn list_boards(
    State(state): State<AppState>,
    Query(query): Query<BoardListQuery>,
) -> ApiResult<Json<ApiResponse<Vec<Board>>>> {
    let boards = state
        .board_service
        .list_boards(query.category.as_deref())
        .await?;
    Ok(Json(ApiResponse::ok(boards)))
}

/// GET /api/boards/{code}?page&limit&search
pub async fn get_board(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Query(params): Query<BoardPageParams>,
) -> ApiResult<Json<ApiResponse<BoardPage>>> {
    let (page, search) = params.into_parts();
    let board_page = state
        .board_service
        .get_board_page(&code, search.as_deref(), page)
        .await?;
    Ok(Json(ApiResponse::ok(board_page)))
}

/// GET /api/boards/{code}/categories
pub async fn list_categories(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> ApiResult<Json<ApiResponse<Vec<Category>>>> {
    let categories = state.board_service.list_categories(&code).await?;
    Ok(Json(ApiResponse::ok(categories)))
}
