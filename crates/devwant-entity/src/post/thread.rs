//! Reply-thread ordering.
//!
//! Every post carries a materialized `thread_path`: the chain of reply
//! ordinals from the thread root down to the post, each rendered as a
//! fixed-width decimal segment and joined with `.`. The root's path is
//! empty. Because segments have equal width, byte-wise ordering of paths
//! is a pre-order walk of the reply tree: a reply sorts right after its
//! parent and its whole subtree sorts before the parent's next reply.
//!
//! ```text
//! ""                     root            sequence 0
//! "000001"               first reply     sequence 1
//! "000001.000001"        its reply       sequence 2
//! "000002"               second reply    sequence 3
//! ```

use serde::{Deserialize, Serialize};

use devwant_core::error::AppError;
use devwant_core::messages;
use devwant_core::result::AppResult;

use super::model::PostListItem;

/// Digits per path segment.
pub const SEGMENT_WIDTH: usize = 6;
/// Largest reply ordinal a single parent can hand out.
pub const MAX_REPLIES_PER_PARENT: i32 = 999_999;
/// Separator between path segments.
pub const SEPARATOR: char = '.';
/// Path of a thread root.
pub const ROOT_PATH: &str = "";

/// Render a reply ordinal as a path segment.
pub fn segment(ordinal: i32) -> AppResult<String> {
    if ordinal < 1 {
        return Err(AppError::internal(format!(
            "Reply ordinal must be positive, got {ordinal}"
        )));
    }
    if ordinal > MAX_REPLIES_PER_PARENT {
        return Err(AppError::conflict(messages::REPLY_LIMIT_REACHED));
    }
    Ok(format!("{ordinal:0width$}", width = SEGMENT_WIDTH))
}

/// Path of the `ordinal`-th reply to the post at `parent_path`.
pub fn child_path(parent_path: &str, ordinal: i32) -> AppResult<String> {
    let seg = segment(ordinal)?;
    if parent_path.is_empty() {
        Ok(seg)
    } else {
        Ok(format!("{parent_path}{SEPARATOR}{seg}"))
    }
}

/// Nesting depth encoded by a path (0 for the root).
pub fn depth_of(path: &str) -> i32 {
    if path.is_empty() {
        0
    } else {
        path.split(SEPARATOR).count() as i32
    }
}

/// Path of the direct parent, or `None` for the root.
pub fn parent_path(path: &str) -> Option<&str> {
    if path.is_empty() {
        return None;
    }
    Some(path.rsplit_once(SEPARATOR).map_or(ROOT_PATH, |(parent, _)| parent))
}

/// Whether `ancestor` lies strictly above `path` in the same thread.
pub fn is_ancestor(ancestor: &str, path: &str) -> bool {
    if ancestor.len() >= path.len() {
        return false;
    }
    if ancestor.is_empty() {
        return true;
    }
    path.starts_with(ancestor) && path[ancestor.len()..].starts_with(SEPARATOR)
}

/// A post with its replies nested below it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreadNode {
    /// The post itself.
    #[serde(flatten)]
    pub post: PostListItem,
    /// Direct replies in display order.
    pub replies: Vec<ThreadNode>,
}

impl ThreadNode {
    fn leaf(post: PostListItem) -> Self {
        Self {
            post,
            replies: Vec::new(),
        }
    }

    /// Total number of posts in this subtree, including this one.
    pub fn subtree_size(&self) -> usize {
        1 + self.replies.iter().map(ThreadNode::subtree_size).sum::<usize>()
    }

    /// Post ids of this subtree in pre-order.
    pub fn preorder_ids(&self) -> Vec<i64> {
        let mut ids = Vec::with_capacity(self.subtree_size());
        self.collect_ids(&mut ids);
        ids
    }

    fn collect_ids(&self, out: &mut Vec<i64>) {
        out.push(self.post.id);
        for reply in &self.replies {
            reply.collect_ids(out);
        }
    }
}

/// Rebuild the reply tree of one thread from its flat rows.
///
/// Rows may arrive in any order and may have gaps (soft-deleted posts are
/// usually filtered out before this point). A reply whose parent is
/// missing is attached to its nearest present ancestor, or becomes a
/// top-level node when none is present. All rows must share one
/// `group_id`.
pub fn build_thread(mut posts: Vec<PostListItem>) -> AppResult<Vec<ThreadNode>> {
    let Some(first) = posts.first() else {
        return Ok(Vec::new());
    };
    let group_id = first.group_id;
    if let Some(stray) = posts.iter().find(|p| p.group_id != group_id) {
        return Err(AppError::internal(format!(
            "Post {} belongs to thread {}, expected {group_id}",
            stray.id, stray.group_id
        )));
    }

    posts.sort_by(|a, b| a.thread_path.cmp(&b.thread_path));
    if let Some(pair) = posts.windows(2).find(|w| w[0].thread_path == w[1].thread_path) {
        return Err(AppError::internal(format!(
            "Posts {} and {} share a thread position",
            pair[0].id, pair[1].id
        )));
    }

    let mut roots: Vec<ThreadNode> = Vec::new();
    let mut stack: Vec<ThreadNode> = Vec::new();

    for post in posts {
        while let Some(top) = stack.last() {
            if is_ancestor(&top.post.thread_path, &post.thread_path) {
                break;
            }
            close_top(&mut stack, &mut roots);
        }
        stack.push(ThreadNode::leaf(post));
    }
    while !stack.is_empty() {
        close_top(&mut stack, &mut roots);
    }

    Ok(roots)
}

/// Pop the innermost open node and attach it to its parent (or the roots).
fn close_top(stack: &mut Vec<ThreadNode>, roots: &mut Vec<ThreadNode>) {
    if let Some(node) = stack.pop() {
        match stack.last_mut() {
            Some(parent) => parent.replies.push(node),
            None => roots.push(node),
        }
    }
}
