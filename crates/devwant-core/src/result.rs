//! Convenience result type alias for DevWant.

use crate::error::AppError;

/// A specialized `Result` type for DevWant operations.
pub type AppResult<T> = Result<T, AppError>;
