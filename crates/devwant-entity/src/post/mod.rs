//! Post domain entities and reply-thread ordering.

pub mod model;
pub mod thread;

pub use model::{CreatePost, Post, PostListItem, UpdatePost};
pub use thread::{ThreadNode, build_thread};
