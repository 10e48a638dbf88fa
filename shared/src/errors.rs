//! Error types shared across the Bookmarks crates

use thiserror::Error;

/// Why a bearer credential was rejected
///
/// Every variant surfaces to clients as the same 401 response. The
/// distinction exists for server-side logs only.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Missing authorization header")]
    MissingToken,

    #[error("Malformed authorization header")]
    MalformedHeader,

    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token subject no longer exists")]
    UnknownSubject,
}
