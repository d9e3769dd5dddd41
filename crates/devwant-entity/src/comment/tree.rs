//! Nested comment trees.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use super::model::Comment;

/// A comment with its replies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentNode {
    #[serde(flatten)]
    pub comment: Comment,
    pub replies: Vec<CommentNode>,
}

/// Group a post's comments into reply trees.
///
/// Siblings are ordered oldest first (ties broken by id). A comment whose
/// parent is not in the input is promoted to the top level.
pub fn build_comment_tree(mut comments: Vec<Comment>) -> Vec<CommentNode> {
    comments.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));

    let ids: HashSet<i64> = comments.iter().map(|c| c.id).collect();
    let mut top_level = Vec::new();
    let mut children: HashMap<i64, Vec<Comment>> = HashMap::new();

    for comment in comments {
        match comment.parent_id {
            Some(parent) if parent != comment.id && ids.contains(&parent) => {
                children.entry(parent).or_default().push(comment);
            }
            _ => top_level.push(comment),
        }
    }

    top_level
        .into_iter()
        .map(|c| attach(c, &mut children))
        .collect()
}

fn attach(comment: Comment, children: &mut HashMap<i64, Vec<Comment>>) -> CommentNode {
    let replies = children
        .remove(&comment.id)
        .unwrap_or_default()
        .into_iter()
        .map(|c| attach(c, children))
        .collect();
    CommentNode { comment, replies }
}
