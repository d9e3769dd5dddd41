//! # devwant-entity
//!
//! Domain entity models for the DevWant forum. Row types derive
//! `sqlx::FromRow`; input structs carry the data a repository needs to
//! insert or update a row. Thread ordering and comment tree assembly are
//! pure functions here so they can be tested without a database.

pub mod board;
pub mod category;
pub mod comment;
pub mod post;
pub mod user;
pub mod vote;
