//! # devwant-database
//!
//! PostgreSQL connection management and concrete repository
//! implementations for every DevWant table.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
