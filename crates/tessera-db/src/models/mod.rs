//! Registry record models.
//!
//! Each model owns its query methods over the document-store capability.

pub mod admin;
pub mod tenant;

pub use admin::Administrator;
pub use tenant::Tenant;
