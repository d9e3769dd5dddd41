//! # devwant-service
//!
//! Business logic service layer for DevWant. Each service orchestrates
//! repositories and auth components to implement one area of the forum.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod auth;
pub mod board;
pub mod comment;
pub mod context;
mod input;
pub mod post;
pub mod user;
pub mod vote;

pub use devwant_core::messages;

pub use auth::{AuthService, SignInResult};
pub use board::{BoardAdminService, BoardService, CategoryService};
pub use comment::CommentService;
pub use context::RequestContext;
pub use post::{PostService, ThumbnailService};
pub use user::UserService;
pub use vote::VoteService;
