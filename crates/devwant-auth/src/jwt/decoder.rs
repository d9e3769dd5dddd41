//! JWT token validation and blocklist checking.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use tracing::debug;

use devwant_core::config::AuthConfig;
use devwant_core::error::AppError;
use devwant_core::messages;
use devwant_core::result::AppResult;

use super::claims::{Claims, TokenType};
use crate::blocklist::TokenBlocklist;

/// Validates JWT tokens and checks blocklist status.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
    /// Revoked token ids.
    blocklist: TokenBlocklist,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig, blocklist: TokenBlocklist) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5;

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
            blocklist,
        }
    }

    /// Decodes and validates an access token string.
    ///
    /// Checks:
    /// 1. Signature validity
    /// 2. Expiration
    /// 3. Token type is Access
    /// 4. JTI not in blocklist
    pub async fn decode_access_token(&self, token: &str) -> AppResult<Claims> {
        self.decode_typed(token, TokenType::Access).await
    }

    /// Decodes and validates a refresh token string.
    pub async fn decode_refresh_token(&self, token: &str) -> AppResult<Claims> {
        self.decode_typed(token, TokenType::Refresh).await
    }

    async fn decode_typed(&self, token: &str, expected: TokenType) -> AppResult<Claims> {
        let claims = self.decode_token(token)?;

        if claims.token_type != expected {
            debug!(expected = ?expected, found = ?claims.token_type, "Token type mismatch");
            return Err(AppError::authentication(messages::INVALID_TOKEN));
        }

        if self.blocklist.is_revoked(&claims.jti).await {
            return Err(AppError::authentication(messages::TOKEN_REVOKED));
        }

        Ok(claims)
    }

    /// Internal decode without type checking.
    fn decode_token(&self, token: &str) -> AppResult<Claims> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                debug!(error = %e, "Token rejected");
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        AppError::authentication(messages::TOKEN_EXPIRED)
                    }
                    _ => AppError::authentication(messages::INVALID_TOKEN),
                }
            })?;

        Ok(token_data.claims)
    }
}
