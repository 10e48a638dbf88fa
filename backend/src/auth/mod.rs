//! Authentication module
//!
//! Provides JWT-based authentication with argon2 password hashing.

mod identity;
mod jwt;
mod password;

pub use identity::{AuthUser, IdentityResolver};
pub use jwt::{Claims, JwtService};
pub use password::PasswordService;
