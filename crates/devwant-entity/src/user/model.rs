//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::provider::AuthProvider;

/// A member who signed in through a social provider.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Internal numeric id.
    pub id: i64,
    /// Public identifier, used as the JWT subject.
    pub uuid: Uuid,
    /// Unique e-mail address reported by the provider.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Avatar URL reported by the provider.
    pub image: Option<String>,
    /// Provider used for the first sign-in.
    pub provider: AuthProvider,
    /// When the user first signed in.
    pub created_at: DateTime<Utc>,
    /// Touched on every sign-in.
    pub updated_at: DateTime<Utc>,
    /// Soft-delete marker.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl User {
    /// Whether the account has been soft-deleted.
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// Data written on a successful OAuth sign-in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpsertUser {
    /// E-mail address (upsert key).
    pub email: String,
    /// Display name for a newly created account.
    pub name: String,
    /// Avatar URL.
    pub image: Option<String>,
    /// Provider that authenticated the user.
    pub provider: AuthProvider,
}

/// Public projection of a user for admin listings.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserSummary {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub image: Option<String>,
    pub provider: AuthProvider,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
