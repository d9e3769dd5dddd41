//! Admin role resolution.

use std::collections::HashSet;

use devwant_core::config::AuthConfig;
use devwant_entity::user::UserRole;

/// Grants the admin role to configured e-mail addresses.
#[derive(Debug, Clone, Default)]
pub struct AdminPolicy {
    emails: HashSet<String>,
}

impl AdminPolicy {
    /// Build the policy from `auth.admin_emails`.
    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(config.admin_emails.iter().map(String::as_str))
    }

    /// Build the policy from a list of addresses.
    pub fn new<'a>(emails: impl IntoIterator<Item = &'a str>) -> Self {
        let emails = emails
            .into_iter()
            .map(|e| e.trim().to_lowercase())
            .filter(|e| !e.is_empty())
            .collect();
        Self { emails }
    }

    /// Role for an account with this e-mail address.
    pub fn role_for(&self, email: &str) -> UserRole {
        if self.emails.contains(&email.trim().to_lowercase()) {
            UserRole::Admin
        } else {
            UserRole::Member
        }
    }

    /// Number of configured admin addresses.
    pub fn len(&self) -> usize {
        self.emails.len()
    }

    /// Whether no admin address is configured.
    pub fn is_empty(&self) -> bool {
        self.emails.is_empty()
    }
}
