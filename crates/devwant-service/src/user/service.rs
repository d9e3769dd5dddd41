//! Profile operations and the admin user list.

use std::sync::Arc;

use tracing::info;

use devwant_core::error::AppError;
use devwant_core::result::AppResult;
use devwant_core::types::pagination::{PageRequest, PageResponse};
use devwant_database::repositories::UserRepository;
use devwant_entity::user::{User, UserSummary};

use crate::context::RequestContext;
use crate::messages;

/// Longest accepted display name, in characters.
pub const MAX_NAME_CHARS: usize = 50;

/// Handles user self-service operations.
#[derive(Debug, Clone)]
pub struct UserService {
    /// User repository.
    user_repo: Arc<UserRepository>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(user_repo: Arc<UserRepository>) -> Self {
        Self { user_repo }
    }

    /// Gets the current user's profile.
    pub async fn profile(&self, ctx: &RequestContext) -> AppResult<User> {
        self.user_repo
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found(messages::USER_NOT_FOUND))
    }

    /// Change the current user's display name.
    pub async fn update_name(&self, ctx: &RequestContext, name: &str) -> AppResult<User> {
        let name = validate_name(name)?;
        let user = self.user_repo.update_name(ctx.user_id, &name).await?;
        info!(user_id = ctx.user_id, "Profile updated");
        Ok(user)
    }

    /// Lists members with pagination.
    pub async fn list_users(&self, page: PageRequest) -> AppResult<PageResponse<UserSummary>> {
        self.user_repo.find_all(&page).await
    }
}

fn validate_name(name: &str) -> AppResult<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::validation(messages::NAME_REQUIRED));
    }
    if name.chars().count() > MAX_NAME_CHARS {
        return Err(AppError::validation(format!(
            "이름은 {MAX_NAME_CHARS}자 이하로 입력해주세요."
        )));
    }
    Ok(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert_eq!(validate_name("  홍길동 ").unwrap(), "홍길동");
        assert_eq!(validate_name("   ").unwrap_err().message, messages::NAME_REQUIRED);
        assert!(validate_name(&"가".repeat(MAX_NAME_CHARS)).is_ok());
        assert!(validate_name(&"가".repeat(MAX_NAME_CHARS + 1)).is_err());
    }
}
