//! Custom Axum extractors.

pub mod auth;
pub mod json;
pub mod pagination;
pub mod path;

pub use auth::{AuthUser, MaybeAuthUser};
pub use json::ValidatedJson;
pub use pagination::{BoardPageParams, PaginationParams};
pub use path::Path;
