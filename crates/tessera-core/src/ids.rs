//! Strongly Typed Identifiers
//!
//! Newtype wrappers over [`Uuid`] that prevent accidental misuse of
//! different ID types at compile time. Malformed identifiers are rejected
//! when parsing, before they ever reach the registry.
//!
//! # Example
//!
//! ```
//! use tessera_core::{AdminId, TenantId};
//!
//! let tenant = TenantId::new();
//! let admin = AdminId::new();
//!
//! fn requires_tenant(id: TenantId) -> String {
//!     id.to_string()
//! }
//!
//! let _ = requires_tenant(tenant);
//! // requires_tenant(admin); // does not compile
//! ```

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

/// Error type for ID parsing failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    /// The type of ID that failed to parse
    pub id_type: &'static str,
    /// The underlying UUID parse error message
    pub message: String,
}

impl Display for ParseIdError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to parse {}: {}", self.id_type, self.message)
    }
}

impl std::error::Error for ParseIdError {}

/// Macro to define a strongly-typed ID type.
macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Creates a new random ID using UUID v4.
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Creates an ID from an existing UUID.
            #[must_use]
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns a reference to the underlying UUID.
            #[must_use]
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIdError;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                Uuid::parse_str(s)
                    .map(Self)
                    .map_err(|e| ParseIdError {
                        id_type: stringify!($name),
                        message: e.to_string(),
                    })
            }
        }
    };
}

define_id!(
    /// Strongly typed identifier for tenants.
    ///
    /// Assigned once at tenant creation and immutable afterwards. Provides
    /// compile-time type safety to prevent confusion with other ID types.
    ///
    /// # Example
    ///
    /// ```
    /// use tessera_core::TenantId;
    ///
    /// let id: TenantId = "550e8400-e29b-41d4-a716-446655440000".parse().unwrap();
    /// assert_eq!(id.to_string(), "550e8400-e29b-41d4-a716-446655440000");
    /// ```
    TenantId
);

define_id!(
    /// Strongly typed identifier for tenant administrators.
    AdminId
);
