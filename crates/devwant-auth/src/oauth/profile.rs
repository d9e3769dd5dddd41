//! Provider user-info normalization.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use devwant_core::error::AppError;
use devwant_core::messages;
use devwant_core::result::AppResult;
use devwant_entity::user::{AuthProvider, UpsertUser};

/// The parts of a provider profile DevWant keeps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderProfile {
    pub provider: AuthProvider,
    /// Lowercased e-mail address.
    pub email: String,
    pub name: String,
    pub image: Option<String>,
}

impl ProviderProfile {
    /// Read a provider's user-info document.
    ///
    /// - Kakao: `properties.nickname`, `kakao_account.email`, `properties.profile_image`
    /// - Naver: `response.name`, `response.email`, `response.profile_image`
    /// - Google: `name`, `email`, `picture`
    pub fn from_user_info(provider: AuthProvider, info: &Value) -> AppResult<Self> {
        let (name, email, image) = match provider {
            AuthProvider::Kakao => (
                text(info, "/properties/nickname"),
                text(info, "/kakao_account/email"),
                text(info, "/properties/profile_image"),
            ),
            AuthProvider::Naver => (
                text(info, "/response/name").or_else(|| text(info, "/response/nickname")),
                text(info, "/response/email"),
                text(info, "/response/profile_image"),
            ),
            AuthProvider::Google => (
                text(info, "/name"),
                text(info, "/email"),
                text(info, "/picture"),
            ),
        };

        let email = email
            .map(|e| e.to_lowercase())
            .ok_or_else(|| AppError::authentication(messages::OAUTH_EMAIL_REQUIRED))?;

        let name = name.unwrap_or_else(|| {
            email
                .split_once('@')
                .map_or(email.as_str(), |(local, _)| local)
                .to_string()
        });

        Ok(Self {
            provider,
            email,
            name,
            image,
        })
    }

    /// Input for the sign-in upsert.
    pub fn to_upsert(&self) -> UpsertUser {
        UpsertUser {
            email: self.email.clone(),
            name: self.name.clone(),
            image: self.image.clone(),
            provider: self.provider,
        }
    }
}

/// Non-blank string at `pointer`.
fn text(info: &Value, pointer: &str) -> Option<String> {
    info.pointer(pointer)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
