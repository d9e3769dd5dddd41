//! `AuthUser` extractor: pulls the bearer token from the Authorization
//! header, validates it, and injects the request context.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::TypedHeader;
use axum_extra::headers::Authorization;
use axum_extra::headers::authorization::Bearer;

use devwant_auth::jwt::Claims;
use devwant_core::error::AppError;
use devwant_service::context::RequestContext;
use devwant_service::messages;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated user context available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// Who is acting.
    pub context: RequestContext,
    /// The validated access token.
    pub claims: Claims,
}

impl AuthUser {
    /// Returns the inner `RequestContext`.
    pub fn context(&self) -> &RequestContext {
        &self.context
    }
}

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.context
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| AppError::authentication(messages::LOGIN_REQUIRED))?;

        let claims = state
            .jwt_decoder
            .decode_access_token(bearer.token())
            .await
            .inspect_err(|e| tracing::debug!(error = %e, "Rejected access token"))?;

        Ok(AuthUser {
            context: RequestContext::from_claims(&claims),
            claims,
        })
    }
}

/// The caller's context, or `None` when no Authorization header is sent.
///
/// A header that is present but invalid is rejected with 401.
#[derive(Debug, Clone)]
pub struct MaybeAuthUser(pub Option<RequestContext>);

impl MaybeAuthUser {
    /// Returns the context, if any.
    pub fn context(&self) -> Option<&RequestContext> {
        self.0.as_ref()
    }
}

impl FromRequestParts<AppState> for MaybeAuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if !parts.headers.contains_key(axum::http::header::AUTHORIZATION) {
            return Ok(Self(None));
        }
        let user = AuthUser::from_request_parts(parts, state).await?;
        Ok(Self(Some(user.context)))
    }
}
