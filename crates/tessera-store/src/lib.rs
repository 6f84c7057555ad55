//! Document-Store Capability for tessera
//!
//! The physical store driver is an external collaborator; this crate defines
//! the capability the rest of the system programs against:
//!
//! - collection namespace operations (create, rename, drop),
//! - document operations by equality filter (find, insert, update, delete),
//! - unique-index declaration, making the storage layer the authority on
//!   uniqueness rather than any check-then-act in application code.
//!
//! [`MemoryStore`] is the in-process implementation used by the binary and
//! the test suites. A driver-backed implementation fills the same trait.

pub mod document;
pub mod error;
pub mod memory;
pub mod traits;

pub use document::{Document, Filter};
pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use traits::DocumentStore;
