//! Typed path parameters with JSON rejections.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use devwant_core::error::AppError;
use devwant_service::messages;

use crate::error::ApiError;

/// `axum::extract::Path` whose failures use the API error body.
#[derive(Debug, Clone)]
pub struct Path<T>(pub T);

impl<S, T> FromRequestParts<S> for Path<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match axum::extract::Path::<T>::from_request_parts(parts, state).await {
            Ok(axum::extract::Path(value)) => Ok(Path(value)),
            Err(rejection) => Err(ApiError::with_details(
                AppError::validation(messages::INVALID_REQUEST),
                serde_json::json!({ "path": rejection.body_text() }),
            )),
        }
    }
}
