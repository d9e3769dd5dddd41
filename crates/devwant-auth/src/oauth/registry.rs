//! The set of enabled providers.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::info;

use devwant_core::config::OAuthConfig;
use devwant_core::error::AppError;
use devwant_core::messages;
use devwant_core::result::AppResult;
use devwant_entity::user::AuthProvider;

use super::client::HttpOAuthProvider;
use super::provider::OAuthProvider;

/// Enabled OAuth providers by kind.
#[derive(Debug, Clone, Default)]
pub struct OAuthRegistry {
    providers: HashMap<AuthProvider, Arc<dyn OAuthProvider>>,
}

impl OAuthRegistry {
    /// Register every provider enabled in configuration.
    pub fn from_config(config: &OAuthConfig, client: reqwest::Client) -> Self {
        let mut registry = Self::default();
        for (kind, credentials) in [
            (AuthProvider::Google, &config.google),
            (AuthProvider::Naver, &config.naver),
            (AuthProvider::Kakao, &config.kakao),
        ] {
            if credentials.enabled {
                registry.register(Arc::new(HttpOAuthProvider::new(
                    kind,
                    client.clone(),
                    credentials.clone(),
                )));
            }
        }
        info!(providers = ?registry.enabled(), "OAuth providers registered");
        registry
    }

    /// Add or replace a provider.
    pub fn register(&mut self, provider: Arc<dyn OAuthProvider>) {
        self.providers.insert(provider.kind(), provider);
    }

    /// The provider of this kind, if enabled.
    pub fn get(&self, kind: AuthProvider) -> AppResult<Arc<dyn OAuthProvider>> {
        self.providers
            .get(&kind)
            .cloned()
            .ok_or_else(|| AppError::validation(messages::PROVIDER_DISABLED))
    }

    /// Enabled providers in a stable order.
    pub fn enabled(&self) -> Vec<AuthProvider> {
        AuthProvider::ALL
            .into_iter()
            .filter(|kind| self.providers.contains_key(kind))
            .collect()
    }
}
