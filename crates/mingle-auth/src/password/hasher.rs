//! Argon2id password hashing and verification.

use argon2::{
    Argon2,
    password_hash::{
        PasswordHash, PasswordHasher as ArgonHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};

use mingle_core::error::AppError;

/// One-way password digest operations over Argon2id.
///
/// The plaintext never leaves this type's methods and is never stored;
/// comparison goes through [`verify_password`](Self::verify_password),
/// not digest equality.
#[derive(Debug, Clone)]
pub struct PasswordHasher;

impl PasswordHasher {
    /// Creates a new password hasher instance.
    pub fn new() -> Self {
        Self
    }

    /// Computes a fresh Argon2id digest of `password` with a random salt.
    ///
    /// Returns the digest in PHC string format, salt included.
    pub fn hash_password(&self, password: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|digest| digest.to_string())
            .map_err(|e| AppError::internal(format!("Failed to compute password digest: {e}")))
    }

    /// Verifies `password` against a stored digest.
    ///
    /// A mismatch is `Ok(false)`, not an error; only an unreadable digest
    /// or a hashing backend fault produces `Err`.
    pub fn verify_password(&self, password: &str, digest: &str) -> Result<bool, AppError> {
        let parsed = PasswordHash::new(digest).map_err(|e| {
            AppError::internal(format!("Stored digest is not a valid PHC string: {e}"))
        })?;

        match Argon2::default().verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AppError::internal(format!(
                "Digest verification failed: {e}"
            ))),
        }
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}
