//! Ownership-scoped bookmark CRUD
//!
//! Ownership is enforced in the SQL itself. A bookmark that exists but
//! belongs to another user is reported as `NotFound`, same as a missing
//! one.

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::repositories::{BookmarkRepository, CreateBookmark, UpdateBookmark};
use bookmarks_shared::{Bookmark, CreateBookmarkRequest, EditBookmarkRequest};
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

fn not_found() -> ApiError {
    ApiError::NotFound("Bookmark not found".to_string())
}

/// Parse a bookmark id from a path segment
///
/// Something that is not a UUID cannot name a bookmark, so it is reported
/// as not found rather than as bad input.
pub fn parse_bookmark_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| not_found())
}

/// CRUD over the caller's own bookmarks
#[derive(Clone)]
pub struct BookmarkService {
    pool: PgPool,
}

impl BookmarkService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        auth: &AuthUser,
        req: CreateBookmarkRequest,
    ) -> Result<Bookmark, ApiError> {
        let input = CreateBookmark {
            user_id: auth.id(),
            title: req.title,
            description: req.description,
            link: req.link,
        };

        let record = BookmarkRepository::create(&self.pool, input)
            .await
            .map_err(ApiError::Internal)?;

        info!(user_id = %auth.id(), bookmark_id = %record.id, "Bookmark created");
        Ok(record.into())
    }

    pub async fn list_mine(&self, auth: &AuthUser) -> Result<Vec<Bookmark>, ApiError> {
        let records = BookmarkRepository::list_for_user(&self.pool, auth.id())
            .await
            .map_err(ApiError::Internal)?;

        Ok(records.into_iter().map(Bookmark::from).collect())
    }

    pub async fn get_by_id(&self, auth: &AuthUser, id: Uuid) -> Result<Bookmark, ApiError> {
        BookmarkRepository::get_by_id(&self.pool, id, auth.id())
            .await
            .map_err(ApiError::Internal)?
            .map(Bookmark::from)
            .ok_or_else(not_found)
    }

    pub async fn update(
        &self,
        auth: &AuthUser,
        id: Uuid,
        req: EditBookmarkRequest,
    ) -> Result<Bookmark, ApiError> {
        let updates = UpdateBookmark {
            title: req.title,
            description: req.description,
            link: req.link,
        };

        let record = BookmarkRepository::update(&self.pool, id, auth.id(), updates)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(not_found)?;

        info!(user_id = %auth.id(), bookmark_id = %id, "Bookmark updated");
        Ok(record.into())
    }

    /// Hard delete; deleting the same id twice fails the second time
    pub async fn delete(&self, auth: &AuthUser, id: Uuid) -> Result<(), ApiError> {
        let deleted = BookmarkRepository::delete(&self.pool, id, auth.id())
            .await
            .map_err(ApiError::Internal)?;

        if !deleted {
            return Err(not_found());
        }

        info!(user_id = %auth.id(), bookmark_id = %id, "Bookmark deleted");
        Ok(())
    }
}
