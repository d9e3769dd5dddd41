//! Normalization of free-text input.

use devwant_core::error::AppError;
use devwant_core::result::AppResult;

/// Trimmed `value`, or a validation error with `message` when blank.
pub(crate) fn required(value: &str, message: &str) -> AppResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::validation(message));
    }
    Ok(trimmed.to_string())
}

/// Trimmed `value`, with blank collapsed to `None`.
pub(crate) fn optional(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
