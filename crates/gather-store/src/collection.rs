//! Insertion-ordered in-memory collection, one per entity type.
//!
//! A [`Collection`] is a plain `Vec` of rows. Lookups are linear scans,
//! which the platform's scale makes acceptable; if a collection ever grows
//! enough to matter, the natural upgrade is an id -> index map alongside
//! the `Vec`, kept out for now.
//!
//! The collection itself does no locking. Callers that interleave requests
//! wrap the owning [`Directory`](crate::Directory) in a read-write lock;
//! single-threaded callers need nothing.

use crate::error::StoreError;
use crate::record::Record;

/// An insertion-ordered collection of one entity type.
///
/// Deleting a row shifts later rows forward but never renumbers or reorders
/// them, so `list` order is always creation order. Ids are minted by
/// [`Record::build`] and never reused.
#[derive(Debug, Clone)]
pub struct Collection<R: Record> {
    items: Vec<R>,
}

impl<R: Record> Collection<R> {
    /// Create an empty collection.
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Full snapshot of the collection in insertion order.
    pub fn list(&self) -> &[R] {
        &self.items
    }

    /// Number of rows currently stored.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the collection holds no rows.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up a row by id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no row has the given id.
    pub fn get(&self, id: R::Id) -> Result<&R, StoreError> {
        self.items
            .iter()
            .find(|r| r.id() == id)
            .ok_or(StoreError::NotFound {
                kind: R::KIND,
                id: id.into(),
            })
    }

    /// Build a row from a draft, append it, and return the stored copy.
    ///
    /// The fresh id and creation timestamp are assigned here (via
    /// [`Record::build`]); the caller never supplies them.
    pub fn insert(&mut self, draft: R::Draft) -> R {
        let record = R::build(draft);
        self.items.push(record.clone());
        record
    }

    /// Merge a patch onto the row with the given id and return the updated
    /// copy. Fields absent from the patch keep their prior values.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no row has the given id; the
    /// collection is unchanged in that case.
    pub fn update(&mut self, id: R::Id, patch: R::Patch) -> Result<R, StoreError> {
        let record = self
            .items
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or(StoreError::NotFound {
                kind: R::KIND,
                id: id.into(),
            })?;
        record.merge(patch);
        Ok(record.clone())
    }

    /// Remove the row with the given id and return it.
    ///
    /// Surviving rows keep their relative order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no row has the given id.
    pub fn remove(&mut self, id: R::Id) -> Result<R, StoreError> {
        let index = self
            .items
            .iter()
            .position(|r| r.id() == id)
            .ok_or(StoreError::NotFound {
                kind: R::KIND,
                id: id.into(),
            })?;
        Ok(self.items.remove(index))
    }

    /// Remove every row and return how many were removed.
    pub fn clear(&mut self) -> usize {
        let count = self.items.len();
        self.items.clear();
        count
    }
}

impl<R: Record> Default for Collection<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use gather_types::{NewUser, User, UserId, UserPatch};

    use super::*;

    fn draft(name: &str) -> NewUser {
        NewUser {
            username: String::from(name),
            email: format!("{name}@example.com"),
        }
    }

    #[test]
    fn insert_then_get_returns_equal_record() {
        let mut users: Collection<User> = Collection::new();
        let stored = users.insert(draft("ada"));
        let fetched = users.get(stored.id);
        assert_eq!(fetched.ok(), Some(&stored));
    }

    #[test]
    fn get_missing_id_is_not_found() {
        let users: Collection<User> = Collection::new();
        let err = users.get(UserId::new());
        assert!(matches!(err, Err(StoreError::NotFound { .. })));
    }

    #[test]
    fn list_preserves_insertion_order_across_deletes() {
        let mut users: Collection<User> = Collection::new();
        let a = users.insert(draft("a"));
        let b = users.insert(draft("b"));
        let c = users.insert(draft("c"));

        assert!(users.remove(b.id).is_ok());

        let names: Vec<&str> = users.list().iter().map(|u| u.username.as_str()).collect();
        assert_eq!(names, vec!["a", "c"]);
        assert_eq!(users.list().first().map(|u| u.id), Some(a.id));
        assert_eq!(users.list().last().map(|u| u.id), Some(c.id));
    }

    #[test]
    fn update_merges_only_provided_fields() {
        let mut users: Collection<User> = Collection::new();
        let stored = users.insert(draft("ada"));

        let updated = users.update(
            stored.id,
            UserPatch {
                email: Some(String::from("new@example.com")),
                username: None,
            },
        );

        let updated = updated.ok();
        assert_eq!(updated.as_ref().map(|u| u.username.as_str()), Some("ada"));
        assert_eq!(
            updated.as_ref().map(|u| u.email.as_str()),
            Some("new@example.com")
        );
    }

    #[test]
    fn empty_patch_leaves_record_unchanged() {
        let mut users: Collection<User> = Collection::new();
        let stored = users.insert(draft("ada"));
        let updated = users.update(stored.id, UserPatch::default());
        assert_eq!(updated.ok(), Some(stored));
    }

    #[test]
    fn update_missing_id_leaves_collection_untouched() {
        let mut users: Collection<User> = Collection::new();
        users.insert(draft("ada"));
        let before: Vec<User> = users.list().to_vec();

        let result = users.update(UserId::new(), UserPatch::default());
        assert!(result.is_err());
        assert_eq!(users.list(), before.as_slice());
    }

    #[test]
    fn remove_returns_the_deleted_record() {
        let mut users: Collection<User> = Collection::new();
        let stored = users.insert(draft("ada"));
        let removed = users.remove(stored.id);
        assert_eq!(removed.ok(), Some(stored.clone()));
        assert!(users.get(stored.id).is_err());
    }

    #[test]
    fn clear_reports_prior_count_and_empties() {
        let mut users: Collection<User> = Collection::new();
        users.insert(draft("a"));
        users.insert(draft("b"));
        users.insert(draft("c"));

        assert_eq!(users.clear(), 3);
        assert!(users.is_empty());
        assert_eq!(users.clear(), 0);
    }
}
