//! Bearer token resolution
//!
//! `IdentityResolver::resolve` turns a raw `Authorization` header value
//! into the live user it names. The `AuthUser` extractor only forwards the
//! header to it, so a handler needs auth exactly when it takes `AuthUser`.
//!
//! Every rejection reason maps to the same 401 response. The reason is
//! logged at debug level and never sent to the client.

use crate::auth::JwtService;
use crate::error::ApiError;
use crate::repositories::UserRepository;
use crate::state::AppState;
use axum::{
    extract::FromRef,
    http::{header::AUTHORIZATION, request::Parts},
};
use bookmarks_shared::{AuthError, User};
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

/// Authenticated caller, password hash already stripped
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user: User,
}

impl AuthUser {
    #[inline]
    pub fn id(&self) -> Uuid {
        self.user.id
    }
}

/// Validates bearer tokens and loads the user they were issued for
#[derive(Clone)]
pub struct IdentityResolver {
    pool: PgPool,
    jwt: JwtService,
}

impl IdentityResolver {
    pub fn new(pool: PgPool, jwt: JwtService) -> Self {
        Self { pool, jwt }
    }

    /// Resolve an `Authorization` header value to the user it names
    pub async fn resolve(&self, header: Option<&str>) -> Result<AuthUser, ApiError> {
        let token = bearer_token(header)?;

        let claims = self.jwt.validate_token(token)?;

        let user_id = Uuid::parse_str(&claims.sub).map_err(|_| AuthError::InvalidToken)?;

        let record = UserRepository::find_by_id(&self.pool, user_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or(AuthError::UnknownSubject)?;

        Ok(AuthUser {
            user: record.into(),
        })
    }
}

/// Extract the token from a `Bearer <token>` header value
///
/// The scheme name is matched case-insensitively (RFC 7235).
fn bearer_token(header: Option<&str>) -> Result<&str, AuthError> {
    let header = header.ok_or(AuthError::MissingToken)?;
    let (scheme, token) = header
        .trim_start()
        .split_once(char::is_whitespace)
        .ok_or(AuthError::MalformedHeader)?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(AuthError::MalformedHeader);
    }

    let token = token.trim();
    if token.is_empty() {
        return Err(AuthError::MalformedHeader);
    }
    Ok(token)
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        debug!(reason = %err, "Rejected bearer credential");
        ApiError::Unauthorized
    }
}

#[axum::async_trait]
impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        // A header that is not valid UTF-8 is treated as malformed
        let header = match parts.headers.get(AUTHORIZATION) {
            Some(value) => Some(value.to_str().map_err(|_| AuthError::MalformedHeader)?),
            None => None,
        };

        app_state.identity().resolve(header).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_bearer_token_extraction() {
        assert_eq!(bearer_token(Some("Bearer abc.def.ghi")), Ok("abc.def.ghi"));
        assert_eq!(bearer_token(None), Err(AuthError::MissingToken));
        assert_eq!(
            bearer_token(Some("Basic dXNlcjpwYXNz")),
            Err(AuthError::MalformedHeader)
        );
        assert_eq!(bearer_token(Some("Bearer ")), Err(AuthError::MalformedHeader));
        assert_eq!(bearer_token(Some("abc.def.ghi")), Err(AuthError::MalformedHeader));
        assert_eq!(bearer_token(Some("Bearerabc")), Err(AuthError::MalformedHeader));
    }

    #[rstest]
    #[case("bearer abc.def.ghi")]
    #[case("BEARER abc.def.ghi")]
    #[case("BeArEr abc.def.ghi")]
    #[case("Bearer   abc.def.ghi  ")]
    #[case("Bearer\tabc.def.ghi")]
    fn test_bearer_scheme_is_case_insensitive(#[case] header: &str) {
        assert_eq!(bearer_token(Some(header)), Ok("abc.def.ghi"));
    }

    #[test]
    fn test_every_auth_error_is_unauthorized() {
        for err in [
            AuthError::MissingToken,
            AuthError::MalformedHeader,
            AuthError::TokenExpired,
            AuthError::InvalidToken,
            AuthError::UnknownSubject,
        ] {
            assert!(matches!(ApiError::from(err), ApiError::Unauthorized));
        }
    }
}
