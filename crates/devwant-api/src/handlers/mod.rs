//! Route handlers organized by domain.

pub mod admin;
pub mod auth;
pub mod board;
pub mod comment;
pub mod health;
pub mod post;
pub mod profile;
pub mod vote;
