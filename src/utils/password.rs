//! Password hashing and verification.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, SaltString};
use argon2::{Argon2, PasswordHasher, PasswordVerifier};
use serde_json::Value;

use crate::error::AppError;

/// One-way transform of a plaintext password into a stored digest.
///
/// `verify` re-hashes the candidate with whatever parameters the digest
/// carries and compares the result. A mismatch is `Ok(false)`; an error means
/// the digest itself is unusable.
pub trait CredentialHasher: Send + Sync {
    fn hash(&self, plaintext: &str) -> Result<String, AppError>;

    fn verify(&self, plaintext: &str, digest: &str) -> Result<bool, AppError>;
}

/// Argon2id hasher producing PHC-format strings with a random salt.
#[derive(Default, Clone)]
pub struct Argon2Hasher {
    argon2: Argon2<'static>,
}

impl Argon2Hasher {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialHasher for Argon2Hasher {
    fn hash(&self, plaintext: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(plaintext.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| {
                tracing::error!(error = %e, "password hashing failed");
                AppError::internal("Failed to process password", Value::Null)
            })
    }

    fn verify(&self, plaintext: &str, digest: &str) -> Result<bool, AppError> {
        let parsed = PasswordHash::new(digest).map_err(|e| {
            tracing::error!(error = %e, "stored password digest is malformed");
            AppError::internal("Failed to process password", Value::Null)
        })?;

        match self.argon2.verify_password(plaintext.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => {
                tracing::error!(error = %e, "password verification failed");
                Err(AppError::internal("Failed to process password", Value::Null))
            }
        }
    }
}
