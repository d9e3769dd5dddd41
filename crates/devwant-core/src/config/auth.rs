//! Authentication configuration: JWT signing, admin accounts, and the
//! social login providers.

use serde::{Deserialize, Serialize};

/// Token issuance and admin resolution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Access token TTL in minutes.
    #[serde(default = "default_access_ttl")]
    pub jwt_access_ttl_minutes: u64,
    /// Refresh token TTL in hours.
    #[serde(default = "default_refresh_ttl")]
    pub jwt_refresh_ttl_hours: u64,
    /// E-mail addresses that receive the admin role on sign-in.
    #[serde(default)]
    pub admin_emails: Vec<String>,
    /// Lifetime of an issued OAuth `state` value, in seconds.
    #[serde(default = "default_state_ttl")]
    pub oauth_state_ttl_seconds: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            jwt_access_ttl_minutes: default_access_ttl(),
            jwt_refresh_ttl_hours: default_refresh_ttl(),
            admin_emails: Vec::new(),
            oauth_state_ttl_seconds: default_state_ttl(),
        }
    }
}

/// Per-provider OAuth client settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OAuthConfig {
    /// Google sign-in.
    #[serde(default)]
    pub google: OAuthClientConfig,
    /// Naver sign-in.
    #[serde(default)]
    pub naver: OAuthClientConfig,
    /// Kakao sign-in.
    #[serde(default)]
    pub kakao: OAuthClientConfig,
}

/// Credentials registered with a single OAuth provider.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OAuthClientConfig {
    /// Whether the provider is offered.
    #[serde(default)]
    pub enabled: bool,
    /// OAuth client id.
    #[serde(default)]
    pub client_id: String,
    /// OAuth client secret.
    #[serde(default)]
    pub client_secret: String,
    /// Redirect URI registered with the provider.
    #[serde(default)]
    pub redirect_uri: String,
}

fn default_jwt_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_access_ttl() -> u64 {
    60
}

fn default_refresh_ttl() -> u64 {
    24 * 14
}

fn default_state_ttl() -> u64 {
    600
}
