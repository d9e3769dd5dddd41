//! Role guard for admin routes.

use devwant_core::error::AppError;
use devwant_service::messages;

use crate::extractors::AuthUser;

/// Checks that the authenticated user has the Admin role.
pub fn require_admin(auth: &AuthUser) -> Result<(), AppError> {
    if !auth.is_admin() {
        tracing::warn!(user_id = auth.user_id, "Admin route refused");
        return Err(AppError::authorization(messages::ADMIN_REQUIRED));
    }
    Ok(())
}
