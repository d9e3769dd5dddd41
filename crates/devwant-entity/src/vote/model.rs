//! Vote entity model and the toggle rules for casting a vote.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;

/// A user's like or dislike on a post. At most one row per (post, user).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vote {
    /// Unique vote identifier.
    pub id: i64,
    /// Voted post.
    pub post_id: i64,
    /// Voter.
    pub user_id: i64,
    /// `true` for a like, `false` for a dislike.
    pub vote_type: bool,
    /// When the vote was cast or last changed.
    pub created_at: DateTime<Utc>,
}

impl Vote {
    /// The vote as a [`VoteType`].
    pub fn kind(&self) -> VoteType {
        VoteType::from_bool(self.vote_type)
    }
}

/// Like or dislike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteType {
    Like,
    Dislike,
}

impl VoteType {
    /// Column representation.
    pub fn as_bool(&self) -> bool {
        matches!(self, Self::Like)
    }

    /// Parse the column representation.
    pub fn from_bool(value: bool) -> Self {
        if value { Self::Like } else { Self::Dislike }
    }
}

impl fmt::Display for VoteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Like => write!(f, "like"),
            Self::Dislike => write!(f, "dislike"),
        }
    }
}

/// What casting a vote did to the stored row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteAction {
    /// No previous vote; a row was inserted.
    New,
    /// The opposite vote existed and was flipped.
    Changed,
    /// The same vote existed and was removed.
    Cancelled,
}

impl VoteAction {
    /// Decide the action for `requested` given the user's current vote.
    ///
    /// Repeating a vote withdraws it; voting the other way flips it.
    pub fn resolve(existing: Option<VoteType>, requested: VoteType) -> Self {
        match existing {
            None => Self::New,
            Some(current) if current == requested => Self::Cancelled,
            Some(_) => Self::Changed,
        }
    }

    /// The user's vote after this action was applied.
    pub fn resulting_vote(&self, requested: VoteType) -> Option<VoteType> {
        match self {
            Self::Cancelled => None,
            Self::New | Self::Changed => Some(requested),
        }
    }
}

/// Counts returned after a vote is cast.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoteSummary {
    /// Likes on the post.
    pub like_count: i64,
    /// Dislikes on the post.
    pub dislike_count: i64,
    /// The caller's vote after the action (`None` when cancelled).
    pub user_vote: Option<VoteType>,
    /// What happened.
    pub action: VoteAction,
}
