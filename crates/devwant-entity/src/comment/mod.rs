//! Comment domain entities.

pub mod model;
pub mod tree;

pub use model::{Comment, CreateComment};
pub use tree::{CommentNode, build_comment_tree};
