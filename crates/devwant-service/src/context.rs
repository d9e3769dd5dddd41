//! Request context carrying the authenticated user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use devwant_auth::jwt::Claims;
use devwant_entity::user::UserRole;

/// Context for the current authenticated request.
///
/// Built from the access token by the API layer and passed into service
/// methods so that every operation knows who is acting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// Internal user id.
    pub user_id: i64,
    /// Public user id (token subject).
    pub user_uuid: Uuid,
    /// Display name from the token.
    pub name: String,
    /// E-mail address from the token.
    pub email: String,
    /// Role resolved at sign-in.
    pub role: UserRole,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Context for the holder of an access token.
    pub fn from_claims(claims: &Claims) -> Self {
        Self {
            user_id: claims.uid,
            user_uuid: claims.sub,
            name: claims.name.clone(),
            email: claims.email.clone(),
            role: claims.role,
            request_time: Utc::now(),
        }
    }

    /// Returns whether the current user is an admin.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Whether the current user wrote a row owned by `user_id`.
    pub fn owns(&self, user_id: i64) -> bool {
        self.user_id == user_id
    }

    /// Owner or admin.
    pub fn can_moderate(&self, owner_id: i64) -> bool {
        self.owns(owner_id) || self.is_admin()
    }
}
