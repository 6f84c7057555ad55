//! Services for the organization lifecycle API.

pub mod org_service;

pub use org_service::OrgService;
