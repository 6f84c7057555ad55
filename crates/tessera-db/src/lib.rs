//! Tenant Registry and Partition Management
//!
//! This crate owns the persistent shape of the system:
//!
//! - [`models`] - `Tenant` and `Administrator` records with their query
//!   methods over the document-store capability. The registry is the single
//!   source of truth for the tenant-name → partition-identifier mapping.
//! - [`partitions`] - derivation of partition identifiers from display
//!   names and the physical collection operations behind them.
//! - [`bootstrap`] - startup preparation: declares the unique indexes that
//!   make the storage layer the authority on name/email uniqueness.

pub mod bootstrap;
pub mod error;
pub mod models;
pub mod partitions;

pub use error::DbError;
pub use models::{Administrator, Tenant};
pub use partitions::{derive_partition_id, PartitionManager};
