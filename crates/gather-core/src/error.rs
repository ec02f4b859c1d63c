//! Error types for the `gather-core` crate.
//!
//! A mutation fails in exactly two ways: a required input field is missing
//! or blank, or the targeted record does not exist. Both abort only the
//! one operation that raised them. Dangling foreign references are not
//! errors at all -- they surface as absent derived fields at read time.

use gather_store::StoreError;

/// Errors that can occur while orchestrating a mutation.
#[derive(Debug, thiserror::Error)]
pub enum MutationError {
    /// A required input field is missing or blank.
    #[error("validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    /// The targeted record does not exist in its collection.
    #[error(transparent)]
    NotFound(#[from] StoreError),
}

#[cfg(test)]
mod tests {
    use gather_types::EntityKind;

    use super::*;

    #[test]
    fn not_found_passes_store_message_through() {
        let err = MutationError::from(StoreError::NotFound {
            kind: EntityKind::Event,
            id: uuid::Uuid::nil(),
        });
        assert!(err.to_string().starts_with("event not found"));
    }
}
