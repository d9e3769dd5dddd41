//! Posts, reply threads, and thumbnails.

pub mod service;
pub mod thumbnail;

pub use service::{CreatePostRequest, PostDetail, PostService, UpdatePostRequest};
pub use thumbnail::ThumbnailService;
