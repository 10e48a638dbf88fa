//! Bookmarks Shared Library
//!
//! Wire types, request validation rules and error types used by the
//! backend and by API clients.

pub mod errors;
pub mod models;
pub mod types;

// Re-export commonly used items
pub use errors::*;
pub use models::{Bookmark, User};
pub use types::*;
