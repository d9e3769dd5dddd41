//! In-memory set of revoked token ids.

use std::time::Duration;

use moka::future::Cache;
use uuid::Uuid;

/// Upper bound on remembered revocations.
const MAX_REVOKED: u64 = 100_000;

/// Revoked JWT ids, each remembered for the longest token lifetime.
#[derive(Debug, Clone)]
pub struct TokenBlocklist {
    cache: Cache<Uuid, ()>,
}

impl TokenBlocklist {
    /// Create a blocklist whose entries expire after `ttl_seconds`.
    pub fn new(ttl_seconds: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(MAX_REVOKED)
            .time_to_live(Duration::from_secs(ttl_seconds.max(60)))
            .build();
        Self { cache }
    }

    /// Revoke a token id.
    pub async fn revoke(&self, jti: Uuid) {
        self.cache.insert(jti, ()).await;
    }

    /// Whether a token id was revoked.
    pub async fn is_revoked(&self, jti: &Uuid) -> bool {
        self.cache.contains_key(jti)
    }
}
