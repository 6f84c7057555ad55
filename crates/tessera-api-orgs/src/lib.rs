//! Organization Lifecycle API for tessera.
//!
//! The orchestration core of the service: composes the tenant registry,
//! partition manager, credential store, and token service into the four
//! lifecycle operations (create, rename, delete, authenticate) plus lookup,
//! and exposes them over a thin axum boundary.
//!
//! Each lifecycle call is a short-lived saga over non-transactional
//! primitives; step ordering keeps failures observable and recoverable
//! rather than silently inconsistent (see [`services::OrgService`]).

pub mod auth;
pub mod error;
pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use auth::AuthContext;
pub use error::{ErrorResponse, OrgError};
pub use router::{auth_router, org_router, OrgAppState};
pub use services::OrgService;
