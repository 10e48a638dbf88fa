//! Business logic services
//!
//! Each service is built once at startup with its collaborators and
//! cloned into handlers through `AppState`.

pub mod auth;
pub mod bookmark;
pub mod user;

pub use auth::AuthService;
pub use bookmark::{parse_bookmark_id, BookmarkService};
pub use user::UserService;
