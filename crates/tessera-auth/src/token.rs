//! Token issuing and validation with HS256.
//!
//! Tokens are signed with a deployment-configured secret; the secret never
//! derives from request data. Validation is strict: zero clock leeway, so a
//! token issued with a zero TTL is already expired.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use tessera_core::{AdminId, TenantId};

use crate::claims::TokenClaims;
use crate::error::AuthError;

/// Issues and validates tenant-scoped bearer tokens.
#[derive(Clone)]
pub struct TokenService {
    secret: Vec<u8>,
    default_ttl: Duration,
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The signing secret must never appear in logs.
        f.debug_struct("TokenService")
            .field("default_ttl", &self.default_ttl)
            .finish_non_exhaustive()
    }
}

impl TokenService {
    /// Create a token service from the signing secret and default TTL.
    #[must_use]
    pub fn new(secret: impl Into<Vec<u8>>, default_ttl: Duration) -> Self {
        Self {
            secret: secret.into(),
            default_ttl,
        }
    }

    /// Issue a signed token for `subject`, scoped to `tenant`.
    ///
    /// Expiry is `now + ttl`, falling back to the configured default TTL
    /// when `ttl` is `None`.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Encoding` if signing fails.
    pub fn issue(
        &self,
        subject: AdminId,
        tenant: TenantId,
        ttl: Option<Duration>,
    ) -> Result<String, AuthError> {
        let claims = TokenClaims::new(subject, tenant, ttl.unwrap_or(self.default_ttl));

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(&self.secret),
        )
        .map_err(|e| AuthError::Encoding(e.to_string()))
    }

    /// Verify a token's signature and claims.
    ///
    /// # Errors
    ///
    /// - `AuthError::InvalidSignature` - signature does not verify
    /// - `AuthError::Expired` - expiry instant has passed
    /// - `AuthError::MalformedClaims` - undecodable token or absent
    ///   required claims (`sub`, `tid`, `exp`)
    pub fn validate(&self, token: &str) -> Result<TokenClaims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked below with zero leeway; the library default
        // tolerates 60 seconds of clock skew, which would accept a ttl=0
        // token.
        validation.validate_exp = false;
        validation.set_required_spec_claims(&["exp"]);

        let data = decode::<TokenClaims>(
            token,
            &DecodingKey::from_secret(&self.secret),
            &validation,
        )
        .map_err(map_jwt_error)?;

        let claims = data.claims;
        if claims.exp <= Utc::now().timestamp() {
            return Err(AuthError::Expired);
        }

        Ok(claims)
    }
}

/// Map jsonwebtoken errors onto the validation taxonomy.
fn map_jwt_error(err: jsonwebtoken::errors::Error) -> AuthError {
    use jsonwebtoken::errors::ErrorKind;

    match err.kind() {
        ErrorKind::ExpiredSignature => AuthError::Expired,
        ErrorKind::InvalidSignature => AuthError::InvalidSignature,
        // Everything else means the token could not be decoded into the
        // expected claim set.
        _ => AuthError::MalformedClaims,
    }
}
