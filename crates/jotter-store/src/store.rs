//! Storage traits consumed by the service layer.
//!
//! Consumers are generic over these traits rather than holding trait
//! objects, so the `async fn` futures are never boxed.

use jotter_core::{NewNote, Note, NoteId, User};

use crate::error::StoreResult;

/// Durable keyed storage for note records.
///
/// Owner-scoped lookups (`*_and_username`) constrain the query to records
/// matching both the identifier and the owning username in one step, so a
/// mismatched owner yields nothing rather than the wrong note.
#[allow(async_fn_in_trait)]
pub trait NoteStore {
    /// Inserts a new note, assigning its id and creation timestamp.
    /// Returns the stored form.
    async fn insert(&self, new: NewNote) -> StoreResult<Note>;

    /// Upserts a note by id, overwriting the stored record.
    async fn save(&self, note: &Note) -> StoreResult<Note>;

    /// Point lookup by id alone.
    async fn find_by_id(&self, id: NoteId) -> StoreResult<Option<Note>>;

    /// Point lookup scoped to an owning username.
    async fn find_by_id_and_username(
        &self,
        id: NoteId,
        username: &str,
    ) -> StoreResult<Option<Note>>;

    /// Every note owned by the username, in store-native order.
    ///
    /// `None` means zero rows; this is distinct from a query failure, and
    /// the service layer maps it to its NotFound policy.
    async fn find_by_username(&self, username: &str) -> StoreResult<Option<Vec<Note>>>;

    /// Notes whose content contains the given substring, scoped to an
    /// owning username. Matching is a case-sensitive literal substring.
    async fn find_by_content_containing_and_username(
        &self,
        substring: &str,
        username: &str,
    ) -> StoreResult<Vec<Note>>;

    /// Notes with at least one label exactly equal to any candidate,
    /// scoped to an owning username.
    async fn find_by_labels_in_and_username(
        &self,
        candidates: &[String],
        username: &str,
    ) -> StoreResult<Vec<Note>>;

    /// Removes the record permanently. No tombstone is kept; deleting an
    /// absent id is a no-op.
    async fn delete_by_id(&self, id: NoteId) -> StoreResult<()>;
}

/// Resolves a username to an existence check.
///
/// Consulted only during sharing; everything else about users lives in the
/// excluded auth layer.
#[allow(async_fn_in_trait)]
pub trait UserDirectory {
    /// Looks up a user by username.
    async fn find_by_username(&self, username: &str) -> StoreResult<Option<User>>;
}
