//! JSON body extractor that runs `validator` rules.

use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use devwant_core::error::AppError;
use devwant_service::messages;

use crate::error::ApiError;

/// A JSON body that parsed and passed its `#[validate]` rules.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(value) = axum::Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                ApiError::with_details(
                    AppError::validation(messages::INVALID_REQUEST),
                    serde_json::json!({ "body": rejection.body_text() }),
                )
            })?;

        value.validate().map_err(validation_error)?;
        Ok(Self(value))
    }
}

/// First field message as the error message, every field in the details.
fn validation_error(errors: ValidationErrors) -> ApiError {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    let message = fields
        .iter()
        .flat_map(|(_, errs)| errs.iter())
        .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| messages::INVALID_REQUEST.to_string());

    let details = serde_json::to_value(&errors).unwrap_or(serde_json::Value::Null);
    ApiError::with_details(AppError::validation(message), details)
}
