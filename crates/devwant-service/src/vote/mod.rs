//! Likes and dislikes on posts.

pub mod service;

pub use service::VoteService;
