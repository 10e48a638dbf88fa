//! Password hashing using argon2
//!
//! Argon2 is intentionally CPU-intensive, so the async variants run the
//! work on tokio's blocking pool.

use anyhow::Result;
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

/// Password hashing service (Argon2id, random salt per hash)
pub struct PasswordService;

impl PasswordService {
    /// Hash a password (blocking)
    pub fn hash(password: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e))?;
        Ok(hash.to_string())
    }

    /// Hash a password on the blocking thread pool
    pub async fn hash_async(password: String) -> Result<String> {
        tokio::task::spawn_blocking(move || Self::hash(&password))
            .await
            .map_err(|e| anyhow::anyhow!("Task join error: {}", e))?
    }

    /// Verify a password against a stored PHC hash (blocking)
    ///
    /// The digest comparison inside `argon2` is constant-time.
    pub fn verify(password: &str, hash: &str) -> Result<bool> {
        let parsed_hash =
            PasswordHash::new(hash).map_err(|e| anyhow::anyhow!("Invalid hash format: {}", e))?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Verify a password on the blocking thread pool
    pub async fn verify_async(password: String, hash: String) -> Result<bool> {
        tokio::task::spawn_blocking(move || Self::verify(&password, &hash))
            .await
            .map_err(|e| anyhow::anyhow!("Task join error: {}", e))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hash = PasswordService::hash("secret").unwrap();

        assert!(PasswordService::verify("secret", &hash).unwrap());
        assert!(!PasswordService::verify("Secret", &hash).unwrap());
    }

    #[test]
    fn test_hash_is_salted_and_opaque() {
        let hash1 = PasswordService::hash("secret").unwrap();
        let hash2 = PasswordService::hash("secret").unwrap();

        assert_ne!(hash1, hash2);
        assert!(!hash1.contains("secret"));
        assert!(hash1.starts_with("$argon2id$"));
    }

    #[test]
    fn test_garbage_hash_is_an_error() {
        assert!(PasswordService::verify("secret", "not-a-phc-string").is_err());
    }

    #[tokio::test]
    async fn test_async_hash_and_verify() {
        let hash = PasswordService::hash_async("secret".to_string()).await.unwrap();

        assert!(PasswordService::verify_async("secret".to_string(), hash.clone())
            .await
            .unwrap());
        assert!(!PasswordService::verify_async("wrong".to_string(), hash)
            .await
            .unwrap());
    }
}
