//! Social sign-in through Google, Naver, and Kakao.
//!
//! The flow is the standard authorization-code grant: the client asks for
//! an authorize URL (which carries a one-time `state`), the provider
//! redirects back with a `code`, and the callback exchanges that code for
//! the user's profile.

pub mod client;
pub mod profile;
pub mod provider;
pub mod registry;
pub mod state;

pub use client::{HttpOAuthProvider, ProviderEndpoints};
pub use profile::ProviderProfile;
pub use provider::OAuthProvider;
pub use registry::OAuthRegistry;
pub use state::StateStore;
