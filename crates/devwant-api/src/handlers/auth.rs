//! Auth handlers: providers, authorize, callback, refresh, logout, me.

use axum::Json;
use axum::extract::State;

use devwant_entity::user::AuthProvider;
use devwant_service::auth::AuthorizeRedirect;

use crate::dto::request::{CallbackRequest, LogoutRequest, RefreshRequest};
use crate::dto::response::{
    ApiResponse, AuthResponse, MessageResponse, ProvidersResponse, SessionResponse,
};
use crate::error::ApiResult;
use crate::extractors::{AuthUser, Path, ValidatedJson};
use crate::state::AppState;

/// GET /api/auth/providers
pub async fn providers(State(state): State<AppState>) -> Json<ApiResponse<ProvidersResponse>> {
    Json(ApiResponse::ok(ProvidersResponse {
        providers: state.auth_service.providers(),
    }))
}

/// GET /api/auth/{provider}/authorize
pub async fn authorize(
    State(state): State<AppState>,
    Path(provider): Path<String>,
) -> ApiResult<Json<ApiResponse<AuthorizeRedirect>>> {
    let provider: AuthProvider = provider.parse()?;
    let redirect = state.auth_service.authorize_url(provider).await?;
    Ok(Json(ApiResponse::ok(redirect)))
}

/// POST /api/auth/{provider}/callback
pub async fn callback(
    State(state): State<AppState>,
    Path(provider): Path<String>,
    ValidatedJson(req): ValidatedJson<CallbackRequest>,
) -> ApiResult<Json<ApiResponse<AuthResponse>>> {
    let provider: AuthProvider = provider.parse()?;
    let result = state
        .auth_service
        .sign_in(provider, &req.code, &req.state)
        .await?;
    Ok(Json(ApiResponse::ok(result.into())))
}

/// POST /api/auth/refresh
pub async fn refresh(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<RefreshRequest>,
) -> ApiResult<Json<ApiResponse<AuthResponse>>> {
    let result = state.auth_service.refresh(&req.refresh_token).await?;
    Ok(Json(ApiResponse::ok(result.into())))
}

/// POST /api/auth/logout
pub async fn logout(
    State(state): State<AppState>,
    auth: AuthUser,
    body: Option<Json<LogoutRequest>>,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    let req = body.map(|Json(req)| req).unwrap_or_default();
    state
        .auth_service
        .logout(&auth.claims, req.refresh_token.as_deref())
        .await?;

    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "로그아웃되었습니다.",
    ))))
}

/// GET /api/auth/me
pub async fn me(auth: AuthUser) -> Json<ApiResponse<SessionResponse>> {
    Json(ApiResponse::ok(SessionResponse::from(&auth.claims)))
}
