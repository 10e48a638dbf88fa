//! Database repositories
//!
//! Provides data access layer for database operations.

pub mod bookmark;
pub mod user;

pub use bookmark::{BookmarkRecord, BookmarkRepository, CreateBookmark, UpdateBookmark};
pub use user::{UpdateUser, UserRecord, UserRepository};

/// Whether a repository error is a unique-constraint violation
pub fn is_unique_violation(err: &anyhow::Error) -> bool {
    err.downcast_ref::<sqlx::Error>()
        .and_then(|e| e.as_database_error())
        .map(|e| e.is_unique_violation())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_database_errors_are_not_unique_violations() {
        assert!(!is_unique_violation(&anyhow::anyhow!("boom")));
        assert!(!is_unique_violation(&anyhow::Error::from(
            sqlx::Error::RowNotFound
        )));
    }
}
