//! Error types for the organization lifecycle API.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tessera_auth::AuthError;
use tessera_db::DbError;
use thiserror::Error;

/// Errors surfaced by the lifecycle operations.
///
/// Every variant maps to a fixed status code. `Unauthorized` carries no
/// cause on purpose: expired token, bad signature, unknown email, and wrong
/// password are indistinguishable at the boundary.
#[derive(Debug, Error)]
pub enum OrgError {
    /// Request input failed validation.
    #[error("validation error: {0}")]
    Validation(String),

    /// Organization name or administrator email already in use.
    #[error("{0}")]
    Conflict(String),

    /// Organization not found.
    #[error("organization not found")]
    NotFound,

    /// Missing, invalid, or expired credentials; causes deliberately
    /// indistinguishable.
    #[error("invalid credentials")]
    Unauthorized,

    /// Authenticated, but the token is scoped to a different tenant.
    #[error("not authorized for this organization")]
    Forbidden,

    /// The store could not be reached; transient, retrying may help.
    #[error("storage temporarily unavailable")]
    StoreUnavailable,

    /// Internal invariant violated, e.g. the registry and the physical
    /// partition namespace disagree. Logged, never auto-healed.
    #[error("inconsistent state: {0}")]
    Inconsistent(String),

    /// Other internal failure.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Error response body for API errors.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    /// Stable machine-readable error code.
    pub error: String,
    /// Human-readable message; never reveals which internal check failed.
    pub message: String,
}

impl From<DbError> for OrgError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::Unavailable(_) => OrgError::StoreUnavailable,
            DbError::NameConflict => {
                OrgError::Conflict("organization name already exists".to_string())
            }
            DbError::EmailConflict => OrgError::Conflict(
                "admin email already registered for another organization".to_string(),
            ),
            DbError::PartitionExists(p) => {
                OrgError::Inconsistent(format!("unexpected existing partition {p}"))
            }
            DbError::PartitionMissing(p) => {
                OrgError::Inconsistent(format!("partition {p} missing where registry says present"))
            }
            DbError::Corrupted(msg) => OrgError::Inconsistent(msg),
        }
    }
}

impl From<AuthError> for OrgError {
    fn from(err: AuthError) -> Self {
        if err.is_token_error() {
            // Expired / bad signature / malformed all collapse here.
            OrgError::Unauthorized
        } else {
            OrgError::Internal(err.to_string())
        }
    }
}

impl IntoResponse for OrgError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match &self {
            OrgError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, "validation_error", msg.clone())
            }
            OrgError::Conflict(msg) => (StatusCode::BAD_REQUEST, "conflict", msg.clone()),
            OrgError::NotFound => (
                StatusCode::NOT_FOUND,
                "not_found",
                "Organization not found".to_string(),
            ),
            // One fixed body for every unauthenticated outcome.
            OrgError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "unauthorized",
                "Invalid credentials".to_string(),
            ),
            OrgError::Forbidden => (
                StatusCode::FORBIDDEN,
                "forbidden",
                "Not authorized for this organization".to_string(),
            ),
            OrgError::StoreUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                "store_unavailable",
                "Storage temporarily unavailable, retrying may help".to_string(),
            ),
            OrgError::Inconsistent(msg) => {
                tracing::error!("inconsistent state: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An unexpected error occurred".to_string(),
                )
            }
            OrgError::Internal(msg) => {
                tracing::error!("internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An unexpected error occurred".to_string(),
                )
            }
        };

        let body = ErrorResponse {
            error: error_code.to_string(),
            message,
        };

        let mut response = (status, Json(body)).into_response();
        if status == StatusCode::UNAUTHORIZED {
            response.headers_mut().insert(
                header::WWW_AUTHENTICATE,
                header::HeaderValue::from_static("Bearer"),
            );
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (OrgError::Validation("x".to_string()), StatusCode::BAD_REQUEST),
            (OrgError::Conflict("x".to_string()), StatusCode::BAD_REQUEST),
            (OrgError::NotFound, StatusCode::NOT_FOUND),
            (OrgError::Unauthorized, StatusCode::UNAUTHORIZED),
            (OrgError::Forbidden, StatusCode::FORBIDDEN),
            (OrgError::StoreUnavailable, StatusCode::SERVICE_UNAVAILABLE),
            (
                OrgError::Inconsistent("x".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                OrgError::Internal("x".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }

    #[test]
    fn test_unauthorized_carries_www_authenticate() {
        let response = OrgError::Unauthorized.into_response();
        assert_eq!(
            response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "Bearer"
        );
    }

    #[test]
    fn test_name_conflict_maps_to_conflict() {
        let err: OrgError = DbError::NameConflict.into();
        assert!(matches!(err, OrgError::Conflict(_)));
    }

    #[test]
    fn test_unavailable_maps_to_store_unavailable() {
        let err: OrgError = DbError::Unavailable("timeout".to_string()).into();
        assert!(matches!(err, OrgError::StoreUnavailable));
    }

    #[test]
    fn test_partition_divergence_maps_to_inconsistent() {
        let err: OrgError = DbError::PartitionMissing("org_acme".to_string()).into();
        assert!(matches!(err, OrgError::Inconsistent(_)));
    }

    #[test]
    fn test_all_token_errors_collapse_to_unauthorized() {
        for auth_err in [
            AuthError::Expired,
            AuthError::InvalidSignature,
            AuthError::MalformedClaims,
        ] {
            let err: OrgError = auth_err.into();
            assert!(matches!(err, OrgError::Unauthorized));
        }
    }

    #[test]
    fn test_hashing_error_is_internal_not_unauthorized() {
        let err: OrgError = AuthError::HashingFailed("boom".to_string()).into();
        assert!(matches!(err, OrgError::Internal(_)));
    }

    #[test]
    fn test_internal_detail_is_logged_not_returned() {
        // The detail is logged, not returned; only the generic message goes
        // out. (Body content is checked in the router tests.)
        let response =
            OrgError::Inconsistent("partition org_x vanished".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
