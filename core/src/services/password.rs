//! One-way password hashing with bcrypt.
//!
//! bcrypt is deliberately slow, so the async entry points move the work onto
//! tokio's blocking pool instead of stalling a runtime worker.

use recipe_shared::validation::PASSWORD_MAX_BYTES;

use crate::errors::{DomainError, DomainResult, ValidationError};

/// bcrypt hasher with a fixed work factor
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash `plaintext` with a fresh salt.
    ///
    /// Input past [`PASSWORD_MAX_BYTES`] is refused rather than truncated.
    pub fn hash(&self, plaintext: &str) -> DomainResult<String> {
        if plaintext.len() > PASSWORD_MAX_BYTES {
            return Err(ValidationError::PasswordTooLong {
                max: PASSWORD_MAX_BYTES,
            }
            .into());
        }

        bcrypt::hash(plaintext, self.cost)
            .map_err(|e| DomainError::internal(format!("Failed to hash password: {}", e)))
    }

    /// Check `plaintext` against a stored hash.
    ///
    /// A mismatch is `Ok(false)`; only a malformed stored hash is an error.
    /// Plaintext longer than [`PASSWORD_MAX_BYTES`] never matches.
    pub fn verify(&self, plaintext: &str, hash: &str) -> DomainResult<bool> {
        if plaintext.len() > PASSWORD_MAX_BYTES {
            return Ok(false);
        }

        bcrypt::verify(plaintext, hash)
            .map_err(|e| DomainError::internal(format!("Failed to verify password: {}", e)))
    }

    /// [`hash`](Self::hash) on the blocking thread pool
    pub async fn hash_blocking(&self, plaintext: String) -> DomainResult<String> {
        let hasher = *self;
        tokio::task::spawn_blocking(move || hasher.hash(&plaintext))
            .await
            .map_err(|e| DomainError::internal(format!("Task join error: {}", e)))?
    }

    /// [`verify`](Self::verify) on the blocking thread pool
    pub async fn verify_blocking(&self, plaintext: String, hash: String) -> DomainResult<bool> {
        let hasher = *self;
        tokio::task::spawn_blocking(move || hasher.verify(&plaintext, &hash))
            .await
            .map_err(|e| DomainError::internal(format!("Task join error: {}", e)))?
    }
}
