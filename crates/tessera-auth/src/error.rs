//! Error types for authentication operations.

use thiserror::Error;

/// Authentication error types.
///
/// The three token-validation variants (`Expired`, `InvalidSignature`,
/// `MalformedClaims`) are distinguished here for logging and tests, but all
/// collapse to one generic unauthenticated outcome at the HTTP boundary so
/// the response never reveals which check failed.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// Token has expired (exp claim is in the past).
    #[error("token has expired")]
    Expired,

    /// Token signature does not verify against the signing secret.
    #[error("invalid token signature")]
    InvalidSignature,

    /// Token is undecodable or a required claim is absent.
    #[error("malformed token claims")]
    MalformedClaims,

    /// Password hashing operation failed.
    #[error("password hashing failed: {0}")]
    HashingFailed(String),

    /// Token encoding failed.
    #[error("token encoding failed: {0}")]
    Encoding(String),
}

impl AuthError {
    /// Check if this error came from token validation.
    #[must_use]
    pub fn is_token_error(&self) -> bool {
        matches!(
            self,
            AuthError::Expired | AuthError::InvalidSignature | AuthError::MalformedClaims
        )
    }

    /// Check if this error indicates an expired token.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        matches!(self, AuthError::Expired)
    }
}
