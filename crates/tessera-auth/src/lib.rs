//! Authentication primitives for tessera.
//!
//! Two concerns live here, both side-effect free:
//!
//! - **Credential store**: Argon2id password hashing and verification
//!   ([`password`]). Hashing is deliberately slow; verification never errors
//!   on malformed input, it simply does not match.
//! - **Token service**: HS256 JWTs binding an administrator to exactly one
//!   tenant ([`token`], [`claims`]). The signing secret and default TTL are
//!   deployment configuration.

pub mod claims;
pub mod error;
pub mod password;
pub mod token;

pub use claims::TokenClaims;
pub use error::AuthError;
pub use password::{hash_password, verify_password, PasswordHasher};
pub use token::TokenService;
