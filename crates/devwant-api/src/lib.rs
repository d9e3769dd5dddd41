//! # devwant-api
//!
//! HTTP API layer for DevWant built on Axum.
//!
//! Provides the REST endpoints for boards, posts, comments, votes, social
//! sign-in and administration, together with middleware (CORS, logging,
//! admin guard), extractors, DTOs, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, build_state, build_state_with_providers};
pub use error::{ApiError, ApiResult};
pub use state::AppState;
