//! Vote domain entities.

pub mod model;

pub use model::{Vote, VoteAction, VoteSummary, VoteType};
