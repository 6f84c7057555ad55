//! Bearer-token authentication for protected lifecycle routes.

use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
};
use tessera_core::{AdminId, TenantId};

use crate::error::OrgError;
use crate::router::OrgAppState;

/// The authenticated caller of a protected route.
///
/// Produced by validating the `Authorization: Bearer` token; the embedded
/// tenant id is the only tenant the caller may act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthContext {
    /// The authenticated administrator.
    pub admin_id: AdminId,
    /// The tenant the token is scoped to.
    pub tenant_id: TenantId,
}

/// Pull the bearer token out of the `Authorization` header.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

#[async_trait]
impl FromRequestParts<OrgAppState> for AuthContext {
    type Rejection = OrgError;

    /// Every failure mode (missing header, bad signature, expired token,
    /// malformed claims) collapses to the same generic 401.
    async fn from_request_parts(
        parts: &mut Parts,
        state: &OrgAppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers).ok_or(OrgError::Unauthorized)?;
        let claims = state.tokens.validate(token)?;
        let admin_id = claims.subject_id().ok_or(OrgError::Unauthorized)?;

        Ok(AuthContext {
            admin_id,
            tenant_id: claims.tenant_id(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_authorization(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_bearer_token_extracted() {
        let headers = headers_with_authorization("Bearer abc.def.ghi");
        assert_eq!(bearer_token(&headers), Some("abc.def.ghi"));
    }

    #[test]
    fn test_missing_header_is_none() {
        assert_eq!(bearer_token(&HeaderMap::new()), None);
    }

    #[test]
    fn test_non_bearer_scheme_is_none() {
        let headers = headers_with_authorization("Basic dXNlcjpwYXNz");
        assert_eq!(bearer_token(&headers), None);
    }

    #[test]
    fn test_scheme_is_case_sensitive() {
        let headers = headers_with_authorization("bearer abc");
        assert_eq!(bearer_token(&headers), None);
    }
}
