//! Password hashing with Argon2id.
//!
//! Salted, irreversible hashing with parameters chosen to make brute force
//! expensive. The same password hashes to a different string on every call
//! because the salt is freshly random.

use crate::error::AuthError;
use argon2::{
    password_hash::{
        rand_core::OsRng, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString,
    },
    Algorithm, Argon2, Params, Version,
};

/// Password hasher configuration.
///
/// Uses OWASP-recommended parameters for Argon2id:
/// - Memory: 19456 KiB (19 MiB)
/// - Iterations: 2
/// - Parallelism: 1
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    params: Params,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasher {
    /// Create a new password hasher with OWASP-recommended parameters.
    #[must_use]
    pub fn new() -> Self {
        // m=19456 (19 MiB), t=2, p=1. These are hardcoded constants that are
        // always valid; failure would indicate a bug in the argon2 crate.
        let params = Params::new(19456, 2, 1, None)
            .expect("OWASP Argon2 parameters are valid constants");

        Self { params }
    }

    /// Create a password hasher with custom parameters.
    ///
    /// Used by tests to trade resistance for speed.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::HashingFailed` if the parameters are invalid.
    pub fn with_params(
        memory_kib: u32,
        iterations: u32,
        parallelism: u32,
    ) -> Result<Self, AuthError> {
        let params = Params::new(memory_kib, iterations, parallelism, None)
            .map_err(|e| AuthError::HashingFailed(format!("invalid parameters: {e}")))?;

        Ok(Self { params })
    }

    /// Hash a password using Argon2id with a fresh random salt.
    ///
    /// Returns a PHC-formatted hash string.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::HashingFailed` if hashing fails.
    pub fn hash(&self, password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone());

        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AuthError::HashingFailed(format!("hashing failed: {e}")))?;

        Ok(hash.to_string())
    }

    /// Verify a password against a PHC-formatted hash.
    ///
    /// Returns `true` iff the password re-hashes (with the embedded salt and
    /// parameters) to the given hash. A malformed hash is treated as a
    /// non-match, never an error.
    #[must_use]
    pub fn verify(&self, password: &str, hash: &str) -> bool {
        let Ok(parsed_hash) = PasswordHash::new(hash) else {
            return false;
        };

        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone());
        argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok()
    }
}

/// Hash a password using the default [`PasswordHasher`].
///
/// # Example
///
/// ```rust
/// use tessera_auth::hash_password;
///
/// let hash = hash_password("my-secure-password").unwrap();
/// assert!(hash.starts_with("$argon2id$"));
/// ```
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    PasswordHasher::new().hash(password)
}

/// Verify a password against an Argon2id hash using the default
/// [`PasswordHasher`].
///
/// # Example
///
/// ```rust
/// use tessera_auth::{hash_password, verify_password};
///
/// let hash = hash_password("my-password").unwrap();
/// assert!(verify_password("my-password", &hash));
/// assert!(!verify_password("wrong-password", &hash));
/// ```
#[must_use]
pub fn verify_password(password: &str, hash: &str) -> bool {
    PasswordHasher::new().verify(password, hash)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Smaller parameters keep the test suite fast; production paths use the
    // OWASP defaults.
    fn fast_hasher() -> PasswordHasher {
        PasswordHasher::with_params(4096, 1, 1).unwrap()
    }

    #[test]
    fn test_hash_password_returns_argon2id() {
        let hash = fast_hasher().hash("test-password").unwrap();
        assert!(hash.starts_with("$argon2id$"));
    }

    #[test]
    fn test_verify_password_correct() {
        let hasher = fast_hasher();
        let hash = hasher.hash("correct-password").unwrap();
        assert!(hasher.verify("correct-password", &hash));
    }

    #[test]
    fn test_verify_password_incorrect() {
        let hasher = fast_hasher();
        let hash = hasher.hash("correct-password").unwrap();
        assert!(!hasher.verify("wrong-password", &hash));
    }

    #[test]
    fn test_verify_malformed_hash_is_false_not_error() {
        let hasher = fast_hasher();
        assert!(!hasher.verify("password", "not-a-valid-hash"));
        assert!(!hasher.verify("password", ""));
        assert!(!hasher.verify("password", "$argon2id$truncated"));
    }

    #[test]
    fn test_hash_is_unique_per_call() {
        let hasher = fast_hasher();
        let hash1 = hasher.hash("same-password").unwrap();
        let hash2 = hasher.hash("same-password").unwrap();

        // Fresh salt every call
        assert_ne!(hash1, hash2);

        assert!(hasher.verify("same-password", &hash1));
        assert!(hasher.verify("same-password", &hash2));
    }

    #[test]
    fn test_default_params_in_phc_string() {
        let hash = hash_password("test").unwrap();
        assert!(hash.contains("m=19456"));
        assert!(hash.contains("t=2"));
        assert!(hash.contains("p=1"));
    }

    #[test]
    fn test_unicode_password() {
        let hasher = fast_hasher();
        let password = "пароль日本語🔐";
        let hash = hasher.hash(password).unwrap();

        assert!(hasher.verify(password, &hash));
        assert!(!hasher.verify("wrong", &hash));
    }

    #[test]
    fn test_empty_password() {
        let hasher = fast_hasher();
        let hash = hasher.hash("").unwrap();
        assert!(hasher.verify("", &hash));
        assert!(!hasher.verify("non-empty", &hash));
    }

    #[test]
    fn test_invalid_params_rejected() {
        // Zero iterations is not a valid Argon2 configuration
        let result = PasswordHasher::with_params(4096, 0, 1);
        assert!(result.is_err());
    }
}
