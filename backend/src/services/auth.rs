//! Signup and signin
//!
//! Password hashing and verification run on the blocking thread pool.
//! Signin gives the same answer for an unknown email and a wrong password,
//! and runs one Argon2 verification in both cases so the two cannot be told
//! apart by response time either.

use crate::auth::{JwtService, PasswordService};
use crate::error::ApiError;
use crate::repositories::{is_unique_violation, UserRecord, UserRepository};
use bookmarks_shared::{AuthRequest, AuthToken};
use sqlx::PgPool;
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::{debug, info};

/// Password hashed once to build the stand-in hash for unknown emails
const DUMMY_PASSWORD: &str = "bookmarks-signin-placeholder";

/// Issues tokens in exchange for credentials
#[derive(Clone)]
pub struct AuthService {
    pool: PgPool,
    jwt: JwtService,
    dummy_hash: Arc<OnceCell<String>>,
}

impl AuthService {
    pub fn new(pool: PgPool, jwt: JwtService) -> Self {
        Self {
            pool,
            jwt,
            dummy_hash: Arc::new(OnceCell::new()),
        }
    }

    /// Create an account and sign it in
    ///
    /// The body has already passed validation. A taken email is a
    /// `Conflict`, detected from the store's unique constraint.
    pub async fn signup(&self, req: AuthRequest) -> Result<AuthToken, ApiError> {
        let password_hash = PasswordService::hash_async(req.password)
            .await
            .map_err(ApiError::Internal)?;

        let user = UserRepository::create(&self.pool, &req.email, &password_hash)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    ApiError::Conflict("Email already registered".to_string())
                } else {
                    ApiError::Internal(e)
                }
            })?;

        info!(user_id = %user.id, "User signed up");
        self.issue(&user)
    }

    /// Exchange email and password for a token
    pub async fn signin(&self, req: AuthRequest) -> Result<AuthToken, ApiError> {
        let Some(user) = UserRepository::find_by_email(&self.pool, &req.email)
            .await
            .map_err(ApiError::Internal)?
        else {
            debug!("Signin for unknown email");
            let hash = self.dummy_hash().await?;
            PasswordService::verify_async(req.password, hash)
                .await
                .map_err(ApiError::Internal)?;
            return Err(ApiError::InvalidCredentials);
        };

        let valid = PasswordService::verify_async(req.password, user.password_hash.clone())
            .await
            .map_err(ApiError::Internal)?;

        if !valid {
            debug!(user_id = %user.id, "Signin with wrong password");
            return Err(ApiError::InvalidCredentials);
        }

        info!(user_id = %user.id, "User signed in");
        self.issue(&user)
    }

    /// Argon2 hash with the same parameters as real ones, computed on first use
    async fn dummy_hash(&self) -> Result<String, ApiError> {
        let hash = self
            .dummy_hash
            .get_or_try_init(|| PasswordService::hash_async(DUMMY_PASSWORD.to_string()))
            .await
            .map_err(ApiError::Internal)?;
        Ok(hash.clone())
    }

    fn issue(&self, user: &UserRecord) -> Result<AuthToken, ApiError> {
        let access_token = self
            .jwt
            .generate_access_token(user.id, &user.email)
            .map_err(ApiError::Internal)?;

        Ok(AuthToken {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in: self.jwt.access_token_expiry_secs(),
        })
    }
}
