//! Self-service profile operations
//!
//! The target row is always the authenticated caller's own.

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::repositories::{is_unique_violation, UpdateUser, UserRepository};
use bookmarks_shared::{EditUserRequest, User};
use sqlx::PgPool;
use tracing::info;

/// Reads and edits the caller's profile
#[derive(Clone)]
pub struct UserService {
    pool: PgPool,
}

impl UserService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// The resolved identity as-is
    pub fn get_self(&self, auth: &AuthUser) -> User {
        auth.user.clone()
    }

    /// Apply the supplied fields to the caller's profile
    pub async fn edit_self(&self, auth: &AuthUser, req: EditUserRequest) -> Result<User, ApiError> {
        let updates = UpdateUser {
            email: req.email,
            first_name: req.first_name,
            last_name: req.last_name,
        };

        let record = UserRepository::update(&self.pool, auth.id(), updates)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    ApiError::Conflict("Email already registered".to_string())
                } else {
                    ApiError::Internal(e)
                }
            })?
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

        info!(user_id = %record.id, "User profile updated");
        Ok(record.into())
    }
}
