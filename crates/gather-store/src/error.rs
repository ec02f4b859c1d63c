//! Error types for the `gather-store` crate.
//!
//! All fallible store operations return [`StoreError`]. Lookup misses are
//! the only failure mode: the store has no I/O and no transient errors.

use gather_types::EntityKind;
use uuid::Uuid;

/// Errors that can occur during store operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// A lookup by id found no matching record in the collection.
    #[error("{kind} not found: {id}")]
    NotFound {
        /// Which collection missed.
        kind: EntityKind,
        /// The id that failed to resolve.
        id: Uuid,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_kind_and_id() {
        let id = Uuid::nil();
        let err = StoreError::NotFound {
            kind: EntityKind::Location,
            id,
        };
        assert_eq!(
            err.to_string(),
            format!("location not found: {id}")
        );
    }
}
