//! One-time `state` values guarding the OAuth callback.

use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use moka::future::Cache;
use tracing::debug;

use devwant_core::error::AppError;
use devwant_core::messages;
use devwant_core::result::AppResult;
use devwant_entity::user::AuthProvider;

/// Outstanding authorization requests.
const MAX_PENDING: u64 = 50_000;

/// Issues `state` values and accepts each one exactly once.
#[derive(Debug, Clone)]
pub struct StateStore {
    pending: Cache<String, AuthProvider>,
}

impl StateStore {
    /// Create a store whose states expire after `ttl_seconds`.
    pub fn new(ttl_seconds: u64) -> Self {
        let pending = Cache::builder()
            .max_capacity(MAX_PENDING)
            .time_to_live(Duration::from_secs(ttl_seconds))
            .build();
        Self { pending }
    }

    /// A fresh state for a sign-in with `provider`.
    pub async fn issue(&self, provider: AuthProvider) -> String {
        let state = URL_SAFE_NO_PAD.encode(rand::random::<[u8; 32]>());
        self.pending.insert(state.clone(), provider).await;
        state
    }

    /// Accept a state returned by `provider`. Unknown, expired, reused, or
    /// cross-provider states are rejected.
    pub async fn consume(&self, state: &str, provider: AuthProvider) -> AppResult<()> {
        match self.pending.remove(state).await {
            Some(issued_for) if issued_for == provider => Ok(()),
            Some(issued_for) => {
                debug!(issued_for = %issued_for, presented = %provider, "OAuth state used with another provider");
                Err(AppError::authentication(messages::OAUTH_STATE_INVALID))
            }
            None => Err(AppError::authentication(messages::OAUTH_STATE_INVALID)),
        }
    }
}
