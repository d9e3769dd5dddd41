//! Social sign-in and token lifecycle.

pub mod service;

pub use service::{AuthService, AuthorizeRedirect, SignInResult};
