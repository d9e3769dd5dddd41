//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use devwant_auth::jwt::{Claims, TokenPair};
use devwant_entity::user::{AuthProvider, User, UserRole};
use devwant_service::SignInResult;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}

/// Detailed health response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedHealthResponse {
    /// Overall status.
    pub status: String,
    /// Database status.
    pub database: String,
    /// Version.
    pub version: String,
}

/// Enabled sign-in providers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvidersResponse {
    pub providers: Vec<AuthProvider>,
}

/// Signed-in member as shown to the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub image: Option<String>,
    pub role: UserRole,
}

impl SessionUser {
    fn new(user: &User, role: UserRole) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
            image: user.image.clone(),
            role,
        }
    }
}

/// Sign-in or refresh response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(flatten)]
    pub tokens: TokenPair,
    pub user: SessionUser,
}

impl From<SignInResult> for AuthResponse {
    fn from(result: SignInResult) -> Self {
        Self {
            user: SessionUser::new(&result.user, result.role),
            tokens: result.tokens,
        }
    }
}

/// `GET /api/auth/me`: what the access token says.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    /// When the access token expires.
    pub expires_at: DateTime<Utc>,
}

impl From<&Claims> for SessionResponse {
    fn from(claims: &Claims) -> Self {
        Self {
            id: claims.uid,
            name: claims.name.clone(),
            email: claims.email.clone(),
            role: claims.role,
            expires_at: claims.expires_at(),
        }
    }
}

/// `GET /api/profile`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub image: Option<String>,
    pub provider: AuthProvider,
    pub created_at: DateTime<Utc>,
}

impl From<User> for ProfileResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            image: user.image,
            provider: user.provider,
            created_at: user.created_at,
        }
    }
}
