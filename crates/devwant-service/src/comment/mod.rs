//! Post comments with replies and mentions.

pub mod service;

pub use service::{CommentService, CreateCommentRequest};
