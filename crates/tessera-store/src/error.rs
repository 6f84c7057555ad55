//! Error types for document-store operations.

use thiserror::Error;

/// Document-store operation errors.
///
/// `Unavailable` is transient and retryable; the remaining variants are
/// logic errors that retrying will not fix.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// The store could not be reached or the operation timed out.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// A collection with this name already exists.
    #[error("collection already exists: {0}")]
    CollectionExists(String),

    /// No collection with this name exists.
    #[error("collection not found: {0}")]
    CollectionNotFound(String),

    /// A declared unique index rejected a write.
    #[error("duplicate value for unique field '{field}' in collection '{collection}'")]
    DuplicateKey {
        /// Collection whose index rejected the write.
        collection: String,
        /// The indexed field that collided.
        field: String,
    },
}

/// Type alias for Results using [`StoreError`].
pub type StoreResult<T> = std::result::Result<T, StoreError>;

impl StoreError {
    /// Check if this error is transient and worth retrying.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(self, StoreError::Unavailable(_))
    }

    /// Check if this error is a unique-index violation.
    #[must_use]
    pub fn is_duplicate_key(&self) -> bool {
        matches!(self, StoreError::DuplicateKey { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoreError::Unavailable("connection refused".to_string());
        assert_eq!(err.to_string(), "store unavailable: connection refused");

        let err = StoreError::CollectionExists("org_acme".to_string());
        assert_eq!(err.to_string(), "collection already exists: org_acme");

        let err = StoreError::DuplicateKey {
            collection: "organizations".to_string(),
            field: "name".to_string(),
        };
        assert!(err.to_string().contains("name"));
        assert!(err.to_string().contains("organizations"));
    }

    #[test]
    fn test_is_transient() {
        assert!(StoreError::Unavailable("down".to_string()).is_transient());
        assert!(!StoreError::CollectionNotFound("x".to_string()).is_transient());
    }

    #[test]
    fn test_is_duplicate_key() {
        let err = StoreError::DuplicateKey {
            collection: "administrators".to_string(),
            field: "email".to_string(),
        };
        assert!(err.is_duplicate_key());
        assert!(!StoreError::Unavailable("down".to_string()).is_duplicate_key());
    }
}
