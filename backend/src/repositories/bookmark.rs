//! Bookmark repository for database operations
//!
//! Every query that touches an existing row filters on both `id` and
//! `user_id`, so a row owned by someone else behaves exactly like a
//! missing one.

use anyhow::Result;
use bookmarks_shared::Bookmark;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Bookmark record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct BookmarkRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub link: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<BookmarkRecord> for Bookmark {
    fn from(record: BookmarkRecord) -> Self {
        Self {
            id: record.id,
            user_id: record.user_id,
            title: record.title,
            description: record.description,
            link: record.link,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// Input for creating a bookmark
#[derive(Debug, Clone)]
pub struct CreateBookmark {
    pub user_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub link: String,
}

/// Input for a partial bookmark update
#[derive(Debug, Clone, Default)]
pub struct UpdateBookmark {
    pub title: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
}

/// Bookmark repository for database operations
pub struct BookmarkRepository;

impl BookmarkRepository {
    /// Create a new bookmark
    pub async fn create(pool: &PgPool, input: CreateBookmark) -> Result<BookmarkRecord> {
        let record = sqlx::query_as::<_, BookmarkRecord>(
            r#"
            INSERT INTO bookmarks (user_id, title, description, link)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, title, description, link, created_at, updated_at
            "#,
        )
        .bind(input.user_id)
        .bind(input.title)
        .bind(input.description)
        .bind(input.link)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// All bookmarks of one user, oldest first
    pub async fn list_for_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<BookmarkRecord>> {
        let records = sqlx::query_as::<_, BookmarkRecord>(
            r#"
            SELECT id, user_id, title, description, link, created_at, updated_at
            FROM bookmarks
            WHERE user_id = $1
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Get a bookmark by ID if it belongs to the user
    pub async fn get_by_id(
        pool: &PgPool,
        id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<BookmarkRecord>> {
        let record = sqlx::query_as::<_, BookmarkRecord>(
            r#"
            SELECT id, user_id, title, description, link, created_at, updated_at
            FROM bookmarks
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Apply the provided fields to a bookmark the user owns
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        user_id: Uuid,
        updates: UpdateBookmark,
    ) -> Result<Option<BookmarkRecord>> {
        let record = sqlx::query_as::<_, BookmarkRecord>(
            r#"
            UPDATE bookmarks SET
                title = COALESCE($3, title),
                description = COALESCE($4, description),
                link = COALESCE($5, link),
                updated_at = NOW()
            WHERE id = $1 AND user_id = $2
            RETURNING id, user_id, title, description, link, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(updates.title)
        .bind(updates.description)
        .bind(updates.link)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Delete a bookmark the user owns
    pub async fn delete(pool: &PgPool, id: Uuid, user_id: Uuid) -> Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM bookmarks
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
