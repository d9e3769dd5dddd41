//! # devwant-core
//!
//! Core crate for the DevWant forum. Contains configuration schemas,
//! pagination types, the unified error system, and user-facing messages.
//!
//! This crate has **no** internal dependencies on other DevWant crates.

pub mod config;
pub mod error;
pub mod messages;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
