//! Social login provider enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The OAuth providers a user can sign in with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "auth_provider", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AuthProvider {
    /// Google accounts.
    Google,
    /// Naver accounts.
    Naver,
    /// Kakao accounts.
    Kakao,
}

impl AuthProvider {
    /// All supported providers.
    pub const ALL: [AuthProvider; 3] = [Self::Google, Self::Naver, Self::Kakao];

    /// Return the provider as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::Naver => "naver",
            Self::Kakao => "kakao",
        }
    }
}

impl fmt::Display for AuthProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AuthProvider {
    type Err = devwant_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "google" => Ok(Self::Google),
            "naver" => Ok(Self::Naver),
            "kakao" => Ok(Self::Kakao),
            _ => Err(devwant_core::AppError::validation(
                devwant_core::messages::UNSUPPORTED_PROVIDER,
            )),
        }
    }
}
