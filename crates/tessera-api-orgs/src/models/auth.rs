//! Authentication request/response models.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for `POST /auth/login`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct LoginRequest {
    /// Administrator email.
    pub email: String,
    /// Administrator password.
    pub password: String,
}

impl LoginRequest {
    /// Validate the request, returning a message for the first violation.
    ///
    /// Only structural checks; nothing here may depend on whether the email
    /// is registered.
    #[must_use]
    pub fn validate(&self) -> Option<String> {
        if self.email.is_empty() {
            return Some("email is required".to_string());
        }
        if self.password.is_empty() {
            return Some("password is required".to_string());
        }
        None
    }
}

/// Bearer token response for a successful login.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TokenResponse {
    /// The signed, opaque bearer token.
    pub access_token: String,
    /// Always `"bearer"`.
    pub token_type: String,
}

impl TokenResponse {
    /// Wrap a signed token in the bearer response shape.
    #[must_use]
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
        }
    }
}
