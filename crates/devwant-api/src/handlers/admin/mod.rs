//! Admin-only handlers.

pub mod boards;
pub mod categories;
pub mod users;
