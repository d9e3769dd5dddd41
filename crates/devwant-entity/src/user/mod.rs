//! User domain entities.

pub mod model;
pub mod provider;
pub mod role;

pub use model::{UpsertUser, User, UserSummary};
pub use provider::AuthProvider;
pub use role::UserRole;
