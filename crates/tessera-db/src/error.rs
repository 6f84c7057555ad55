//! Error types for the tessera-db crate.

use tessera_store::StoreError;
use thiserror::Error;

/// Registry and partition operation errors.
#[derive(Debug, Clone, Error)]
pub enum DbError {
    /// The store could not be reached; transient and retryable.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// The organization name (or its derived partition id) is taken.
    #[error("organization name already exists")]
    NameConflict,

    /// The administrator email is registered for another organization.
    #[error("administrator email already registered")]
    EmailConflict,

    /// A partition exists where none was expected.
    #[error("partition already exists: {0}")]
    PartitionExists(String),

    /// A partition is missing where the registry says one exists.
    #[error("partition not found: {0}")]
    PartitionMissing(String),

    /// A stored record could not be decoded; internal invariant violated.
    #[error("corrupted registry record: {0}")]
    Corrupted(String),
}

impl DbError {
    /// Check if this error is transient and worth retrying.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(self, DbError::Unavailable(_))
    }

    /// Check if this error is a uniqueness conflict the caller can correct.
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        matches!(self, DbError::NameConflict | DbError::EmailConflict)
    }
}

impl From<StoreError> for DbError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Unavailable(msg) => DbError::Unavailable(msg),
            StoreError::CollectionExists(name) => DbError::PartitionExists(name),
            StoreError::CollectionNotFound(name) => DbError::PartitionMissing(name),
            StoreError::DuplicateKey { field, collection } => match field.as_str() {
                "email" => DbError::EmailConflict,
                // Both the display name and its derived partition id carry
                // unique indexes; either rejection is a name conflict.
                "name" | "partition_id" => DbError::NameConflict,
                _ => DbError::Corrupted(format!(
                    "unexpected unique index '{field}' on collection '{collection}'"
                )),
            },
        }
    }
}
