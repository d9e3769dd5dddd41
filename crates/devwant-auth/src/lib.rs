//! # devwant-auth
//!
//! Authentication for the DevWant forum.
//!
//! ## Modules
//!
//! - `jwt`: access/refresh token issuance and validation
//! - `blocklist`: revoked token ids
//! - `oauth`: Google, Naver, and Kakao sign-in
//! - `admin`: admin role resolution from configured e-mail addresses

pub mod admin;
pub mod blocklist;
pub mod jwt;
pub mod oauth;

pub use admin::AdminPolicy;
pub use blocklist::TokenBlocklist;
pub use jwt::{Claims, JwtDecoder, JwtEncoder, TokenPair};
pub use oauth::{OAuthProvider, OAuthRegistry, ProviderProfile, StateStore};
