//! Document and filter types for the store capability.

use serde_json::{Map, Value};

/// A stored document: a JSON object map.
///
/// Records are converted to and from this shape with `serde_json`; the store
/// itself is schema-free.
pub type Document = Map<String, Value>;

/// A conjunction of field-equality clauses.
///
/// This is the only query shape the registry needs: exact-match lookups on
/// one or two fields.
///
/// # Example
///
/// ```
/// use tessera_store::Filter;
///
/// let filter = Filter::eq("email", "admin@example.com");
/// let multi = Filter::eq("tenant_id", "abc").and("email", "x@y.z");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Filter {
    clauses: Vec<(String, Value)>,
}

impl Filter {
    /// Create a filter with a single equality clause.
    #[must_use]
    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            clauses: vec![(field.into(), value.into())],
        }
    }

    /// Add another equality clause; all clauses must match.
    #[must_use]
    pub fn and(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.clauses.push((field.into(), value.into()));
        self
    }

    /// Check whether a document satisfies every clause.
    #[must_use]
    pub fn matches(&self, document: &Document) -> bool {
        self.clauses
            .iter()
            .all(|(field, value)| document.get(field) == Some(value))
    }

    /// The fields this filter constrains.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.clauses.iter().map(|(field, _)| field.as_str())
    }
}
