//! The OAuth provider abstraction.

use async_trait::async_trait;

use devwant_core::result::AppResult;
use devwant_entity::user::AuthProvider;

use super::profile::ProviderProfile;

/// A social login provider.
#[async_trait]
pub trait OAuthProvider: Send + Sync + std::fmt::Debug {
    /// Which provider this is.
    fn kind(&self) -> AuthProvider;

    /// URL the browser is sent to, carrying the one-time `state`.
    fn authorize_url(&self, state: &str) -> AppResult<String>;

    /// Exchange an authorization code for the signed-in user's profile.
    async fn exchange_code(&self, code: &str, state: &str) -> AppResult<ProviderProfile>;
}
