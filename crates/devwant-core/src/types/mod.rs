//! Core type definitions shared across the DevWant workspace.

pub mod pagination;

pub use pagination::{PageRequest, PageResponse};
