//! Member profiles and the admin user list.

pub mod service;

pub use service::UserService;
