//! API request and response types
//!
//! Request bodies carry their `validator` rules so the backend can run a
//! single validation step before any business logic. Unknown JSON fields
//! are ignored by serde, which strips them from the request.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Longest password accepted on signup
pub const MAX_PASSWORD_LENGTH: u64 = 128;

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// Access token response for signup and signin
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthToken {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// Credentials body shared by signup and signin
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AuthRequest {
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, max = 128, message = "must be between 1 and 128 characters"))]
    pub password: String,
}

/// Partial self-edit of the authenticated user
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EditUserRequest {
    #[serde(default)]
    #[validate(email(message = "must be a valid email address"))]
    pub email: Option<String>,
    #[serde(default)]
    #[validate(length(max = 255))]
    pub first_name: Option<String>,
    #[serde(default)]
    #[validate(length(max = 255))]
    pub last_name: Option<String>,
}

/// New bookmark body
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateBookmarkRequest {
    #[validate(length(min = 1, max = 255, message = "must be between 1 and 255 characters"))]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[validate(url(message = "must be a valid URL"))]
    pub link: String,
}

/// Partial bookmark edit
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct EditBookmarkRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 255, message = "must be between 1 and 255 characters"))]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    #[validate(url(message = "must be a valid URL"))]
    pub link: Option<String>,
}
