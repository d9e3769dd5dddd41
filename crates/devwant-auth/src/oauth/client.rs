//! HTTP implementation of the authorization-code grant.

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use devwant_core::config::OAuthClientConfig;
use devwant_core::error::{AppError, ErrorKind};
use devwant_core::messages;
use devwant_core::result::AppResult;
use devwant_entity::user::AuthProvider;

use super::profile::ProviderProfile;
use super::provider::OAuthProvider;

/// Fixed URLs of a provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderEndpoints {
    pub authorize_url: String,
    pub token_url: String,
    pub user_info_url: String,
    /// Requested scopes, space separated. Empty when the provider takes none.
    pub scope: String,
}

impl ProviderEndpoints {
    /// Production endpoints of a provider.
    pub fn for_provider(provider: AuthProvider) -> Self {
        let (authorize_url, token_url, user_info_url, scope) = match provider {
            AuthProvider::Google => (
                "https://accounts.google.com/o/oauth2/v2/auth",
                "https://oauth2.googleapis.com/token",
                "https://openidconnect.googleapis.com/v1/userinfo",
                "openid email profile",
            ),
            AuthProvider::Naver => (
                "https://nid.naver.com/oauth2.0/authorize",
                "https://nid.naver.com/oauth2.0/token",
                "https://openapi.naver.com/v1/nid/me",
                "",
            ),
            AuthProvider::Kakao => (
                "https://kauth.kakao.com/oauth/authorize",
                "https://kauth.kakao.com/oauth/token",
                "https://kapi.kakao.com/v2/user/me",
                "profile_nickname profile_image account_email",
            ),
        };
        Self {
            authorize_url: authorize_url.to_string(),
            token_url: token_url.to_string(),
            user_info_url: user_info_url.to_string(),
            scope: scope.to_string(),
        }
    }
}

/// Token endpoint response. Providers report failures in-band.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
    error: Option<String>,
    error_description: Option<String>,
}

/// A provider reached over HTTPS.
#[derive(Debug, Clone)]
pub struct HttpOAuthProvider {
    kind: AuthProvider,
    client: Client,
    credentials: OAuthClientConfig,
    endpoints: ProviderEndpoints,
}

impl HttpOAuthProvider {
    /// Provider with its production endpoints.
    pub fn new(kind: AuthProvider, client: Client, credentials: OAuthClientConfig) -> Self {
        Self::with_endpoints(kind, client, credentials, ProviderEndpoints::for_provider(kind))
    }

    /// Provider with explicit endpoints.
    pub fn with_endpoints(
        kind: AuthProvider,
        client: Client,
        credentials: OAuthClientConfig,
        endpoints: ProviderEndpoints,
    ) -> Self {
        Self {
            kind,
            client,
            credentials,
            endpoints,
        }
    }

    fn upstream_error(&self, message: &str, err: reqwest::Error) -> AppError {
        warn!(provider = %self.kind, error = %err, "{message}");
        AppError::with_source(ErrorKind::ExternalService, messages::OAUTH_UNAVAILABLE, err)
    }

    async fn fetch_access_token(&self, code: &str, state: &str) -> AppResult<String> {
        let form = [
            ("grant_type", "authorization_code"),
            ("client_id", self.credentials.client_id.as_str()),
            ("client_secret", self.credentials.client_secret.as_str()),
            ("redirect_uri", self.credentials.redirect_uri.as_str()),
            ("code", code),
            ("state", state),
        ];

        let response = self
            .client
            .post(&self.endpoints.token_url)
            .form(&form)
            .send()
            .await
            .map_err(|e| self.upstream_error("token request failed", e))?;

        let status = response.status();
        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| self.upstream_error("token response was not JSON", e))?;

        match (token.access_token, token.error) {
            (Some(access_token), None) if status.is_success() => Ok(access_token),
            (_, error) => {
                warn!(
                    provider = %self.kind,
                    status = %status,
                    error = ?error,
                    description = ?token.error_description,
                    "Authorization code rejected"
                );
                Err(AppError::authentication(messages::OAUTH_CODE_REJECTED))
            }
        }
    }

    async fn fetch_user_info(&self, access_token: &str) -> AppResult<Value> {
        let response = self
            .client
            .get(&self.endpoints.user_info_url)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| self.upstream_error("user info request failed", e))?;

        if !response.status().is_success() {
            warn!(provider = %self.kind, status = %response.status(), "User info request rejected");
            return Err(AppError::external_service(messages::OAUTH_UNAVAILABLE));
        }

        response
            .json()
            .await
            .map_err(|e| self.upstream_error("user info was not JSON", e))
    }
}

#[async_trait]
impl OAuthProvider for HttpOAuthProvider {
    fn kind(&self) -> AuthProvider {
        self.kind
    }

    fn authorize_url(&self, state: &str) -> AppResult<String> {
        let mut params = vec![
            ("response_type", "code"),
            ("client_id", self.credentials.client_id.as_str()),
            ("redirect_uri", self.credentials.redirect_uri.as_str()),
            ("state", state),
        ];
        if !self.endpoints.scope.is_empty() {
            params.push(("scope", self.endpoints.scope.as_str()));
        }

        Url::parse_with_params(&self.endpoints.authorize_url, &params)
            .map(String::from)
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Configuration,
                    format!("Invalid authorize URL for {}", self.kind),
                    e,
                )
            })
    }

    async fn exchange_code(&self, code: &str, state: &str) -> AppResult<ProviderProfile> {
        let access_token = self.fetch_access_token(code, state).await?;
        let info = self.fetch_user_info(&access_token).await?;
        debug!(provider = %self.kind, "Fetched provider profile");
        ProviderProfile::from_user_info(self.kind, &info)
    }
}
