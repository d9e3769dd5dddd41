//! Sign-in through social providers, token refresh, and logout.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use devwant_auth::admin::AdminPolicy;
use devwant_auth::blocklist::TokenBlocklist;
use devwant_auth::jwt::{Claims, JwtDecoder, JwtEncoder, TokenPair};
use devwant_auth::oauth::{OAuthRegistry, StateStore};
use devwant_core::error::AppError;
use devwant_core::result::AppResult;
use devwant_database::repositories::UserRepository;
use devwant_entity::user::{AuthProvider, User, UserRole};

use crate::messages;

/// Where to send the browser to start a sign-in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorizeRedirect {
    pub provider: AuthProvider,
    pub url: String,
    pub state: String,
}

/// Outcome of a sign-in or refresh.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignInResult {
    pub tokens: TokenPair,
    pub user: User,
    pub role: UserRole,
}

/// Orchestrates the OAuth flow and token lifecycle.
#[derive(Debug, Clone)]
pub struct AuthService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Enabled providers.
    registry: Arc<OAuthRegistry>,
    /// Outstanding OAuth states.
    states: Arc<StateStore>,
    /// Token issuer.
    encoder: Arc<JwtEncoder>,
    /// Token validator.
    decoder: Arc<JwtDecoder>,
    /// Revoked tokens.
    blocklist: Arc<TokenBlocklist>,
    /// Admin resolution.
    admins: Arc<AdminPolicy>,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        registry: Arc<OAuthRegistry>,
        states: Arc<StateStore>,
        encoder: Arc<JwtEncoder>,
        decoder: Arc<JwtDecoder>,
        blocklist: Arc<TokenBlocklist>,
        admins: Arc<AdminPolicy>,
    ) -> Self {
        Self {
            user_repo,
            registry,
            states,
            encoder,
            decoder,
            blocklist,
            admins,
        }
    }

    /// Providers offered on the login page.
    pub fn providers(&self) -> Vec<AuthProvider> {
        self.registry.enabled()
    }

    /// Start a sign-in: issue a state and build the provider URL.
    pub async fn authorize_url(&self, provider: AuthProvider) -> AppResult<AuthorizeRedirect> {
        let client = self.registry.get(provider)?;
        let state = self.states.issue(provider).await;
        let url = client.authorize_url(&state)?;
        Ok(AuthorizeRedirect {
            provider,
            url,
            state,
        })
    }

    /// Finish a sign-in.
    ///
    /// 1. Consume the state
    /// 2. Exchange the code for the provider profile
    /// 3. Create or touch the user by e-mail
    /// 4. Resolve the role and issue tokens
    pub async fn sign_in(
        &self,
        provider: AuthProvider,
        code: &str,
        state: &str,
    ) -> AppResult<SignInResult> {
        self.states.consume(state, provider).await?;
        let client = self.registry.get(provider)?;

        let profile = client.exchange_code(code, state).await?;
        let user = self.user_repo.upsert_oauth_user(&profile.to_upsert()).await?;
        if user.is_deleted() {
            warn!(user_id = user.id, provider = %provider, "Sign-in by deleted account refused");
            return Err(AppError::authentication("탈퇴한 계정입니다."));
        }

        let role = self.admins.role_for(&user.email);
        let tokens = self.encoder.generate_token_pair(&user, role)?;
        info!(user_id = user.id, provider = %provider, role = %role, "User signed in");

        Ok(SignInResult { tokens, user, role })
    }

    /// Trade a refresh token for a new pair. The presented token is revoked.
    pub async fn refresh(&self, refresh_token: &str) -> AppResult<SignInResult> {
        let claims = self.decoder.decode_refresh_token(refresh_token).await?;
        let user = self
            .user_repo
            .find_by_uuid(claims.sub)
            .await?
            .ok_or_else(|| AppError::authentication(messages::ACCOUNT_GONE))?;

        self.blocklist.revoke(claims.jti).await;

        let role = self.admins.role_for(&user.email);
        let tokens = self.encoder.generate_token_pair(&user, role)?;
        info!(user_id = user.id, "Tokens refreshed");

        Ok(SignInResult { tokens, user, role })
    }

    /// Revoke the caller's access token and, when given, its refresh token.
    pub async fn logout(&self, claims: &Claims, refresh_token: Option<&str>) -> AppResult<()> {
        self.blocklist.revoke(claims.jti).await;

        if let Some(token) = refresh_token {
            match self.decoder.decode_refresh_token(token).await {
                Ok(refresh) if refresh.sub == claims.sub => self.blocklist.revoke(refresh.jti).await,
                Ok(_) => return Err(AppError::authorization(messages::TOKEN_OWNER_MISMATCH)),
                Err(e) => warn!(error = %e, "Ignoring unusable refresh token on logout"),
            }
        }

        info!(user_id = claims.uid, "User logged out");
        Ok(())
    }
}
