//! The note access service.
//!
//! Every operation is bound to an owning username: fetches are scoped to
//! (id, username) in a single store call, so a lookup under a mismatched
//! owner returns nothing rather than the wrong note, and another user's
//! content is never exposed even transiently.
//!
//! Control flow per call: rate limiter first (one token for the operation
//! name; rejection means the store is never touched), then the operation
//! body. Search delegates to the strategy registry; share consults the user
//! directory before copying.

use std::sync::Arc;

use jotter_core::{NewNote, Note, NoteId, NotePatch, QueryType};
use jotter_store::{NoteStore, UserDirectory};

use crate::config::ServiceConfig;
use crate::error::{ServiceError, ServiceResult};
use crate::ratelimit::RateLimiter;
use crate::search::SearchStrategyRegistry;

/// Operation names used as rate-limiter bucket keys.
pub mod ops {
    /// Key for [`NoteService::create`](super::NoteService::create).
    pub const CREATE_NOTE: &str = "create_note";
    /// Key for [`NoteService::get_by_id`](super::NoteService::get_by_id).
    pub const GET_NOTE_BY_ID: &str = "get_note_by_id";
    /// Key for [`NoteService::get_all`](super::NoteService::get_all).
    pub const GET_ALL_NOTES: &str = "get_all_notes";
    /// Key for [`NoteService::update`](super::NoteService::update).
    pub const UPDATE_NOTE: &str = "update_note";
    /// Key for [`NoteService::delete`](super::NoteService::delete).
    pub const DELETE_NOTE_BY_ID: &str = "delete_note_by_id";
    /// Key for [`NoteService::share`](super::NoteService::share).
    pub const SHARE_NOTE_WITH_USER: &str = "share_note_with_user";
    /// Key for [`NoteService::search`](super::NoteService::search).
    pub const SEARCH_NOTES: &str = "search_notes";
}

/// The note access-control and retrieval engine.
///
/// Generic over its store and user-directory collaborators, which are
/// injected at construction along with the rate-limit policy. The strategy
/// registry and rate limiter are instance state; constructing two services
/// gives two independent quotas.
#[derive(Debug)]
pub struct NoteService<S, U> {
    store: Arc<S>,
    users: Arc<U>,
    registry: SearchStrategyRegistry,
    limiter: RateLimiter,
}

impl<S, U> NoteService<S, U>
where
    S: NoteStore,
    U: UserDirectory,
{
    /// Creates a service with the default configuration.
    pub fn new(store: Arc<S>, users: Arc<U>) -> Self {
        Self::with_config(store, users, ServiceConfig::default())
    }

    /// Creates a service with an explicit configuration.
    pub fn with_config(store: Arc<S>, users: Arc<U>, config: ServiceConfig) -> Self {
        Self {
            store,
            users,
            registry: SearchStrategyRegistry::new(),
            limiter: RateLimiter::new(config.rate_limit),
        }
    }

    /// Get a reference to the underlying note store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Stores a new note as-is and returns the stored form with its
    /// assigned id and timestamp.
    ///
    /// No ownership check: the owner is set by the caller, and verifying
    /// the caller's identity is the job of the auth layer upstream.
    pub async fn create(&self, new: NewNote) -> ServiceResult<Note> {
        self.limiter.check(ops::CREATE_NOTE)?;

        let note = self.store.insert(new).await?;
        tracing::info!(note_id = %note.id, owner = %note.owner, "Note created");
        Ok(note)
    }

    /// Fetches a note by id, constrained to the given username.
    ///
    /// Fails with [`ServiceError::NoteNotFound`] when no note with that id
    /// exists for that owner.
    pub async fn get_by_id(&self, id: NoteId, username: &str) -> ServiceResult<Note> {
        self.limiter.check(ops::GET_NOTE_BY_ID)?;

        self.store
            .find_by_id_and_username(id, username)
            .await?
            .ok_or(ServiceError::NoteNotFound(id))
    }

    /// Returns every note owned by the username, in store-native order.
    ///
    /// Zero owned notes is a [`ServiceError::NoNotesForUser`] failure, not
    /// an empty list. Deliberate policy, kept for contract stability.
    pub async fn get_all(&self, username: &str) -> ServiceResult<Vec<Note>> {
        self.limiter.check(ops::GET_ALL_NOTES)?;

        self.store
            .find_by_username(username)
            .await?
            .ok_or_else(|| ServiceError::NoNotesForUser(username.to_string()))
    }

    /// Overwrites the title, content, and labels of an owned note.
    ///
    /// Id, owner, and creation timestamp are untouched; the patch type
    /// cannot carry them. Fails with [`ServiceError::NoteNotFound`] when
    /// the note does not exist for that owner.
    pub async fn update(
        &self,
        id: NoteId,
        username: &str,
        patch: NotePatch,
    ) -> ServiceResult<Note> {
        self.limiter.check(ops::UPDATE_NOTE)?;

        let mut note = self
            .store
            .find_by_id_and_username(id, username)
            .await?
            .ok_or(ServiceError::NoteNotFound(id))?;

        note.apply(patch);
        let saved = self.store.save(&note).await?;

        tracing::debug!(note_id = %id, owner = %username, "Note updated");
        Ok(saved)
    }

    /// Permanently removes an owned note. No soft-delete, no tombstone.
    ///
    /// Fails with [`ServiceError::NoteNotFound`] when the note does not
    /// exist for that owner.
    pub async fn delete(&self, id: NoteId, username: &str) -> ServiceResult<()> {
        self.limiter.check(ops::DELETE_NOTE_BY_ID)?;

        let note = self
            .store
            .find_by_id_and_username(id, username)
            .await?
            .ok_or(ServiceError::NoteNotFound(id))?;

        self.store.delete_by_id(note.id).await?;
        tracing::info!(note_id = %id, owner = %username, "Note deleted");
        Ok(())
    }

    /// Shares a note by storing an independent copy owned by the recipient.
    ///
    /// The sender must own the note ([`ServiceError::NoteNotFound`]
    /// otherwise; this takes precedence) and the recipient must exist in
    /// the user directory ([`ServiceError::UserNotFound`] otherwise). Both
    /// checks happen before any mutation. The copy gets a new id and
    /// timestamp with title, content, and labels taken verbatim from the
    /// source; the source note is not modified and keeps no link to the
    /// copy. A failure while persisting the copy surfaces as
    /// [`ServiceError::ShareFailed`].
    pub async fn share(
        &self,
        id: NoteId,
        sender: &str,
        recipient: &str,
    ) -> ServiceResult<Note> {
        self.limiter.check(ops::SHARE_NOTE_WITH_USER)?;

        let source = self
            .store
            .find_by_id_and_username(id, sender)
            .await?
            .ok_or(ServiceError::NoteNotFound(id))?;

        self.users
            .find_by_username(recipient)
            .await?
            .ok_or_else(|| ServiceError::UserNotFound(recipient.to_string()))?;

        let copy = NewNote {
            title: source.title.clone(),
            content: source.content.clone(),
            labels: source.labels.clone(),
            owner: recipient.to_string(),
        };

        let shared = self
            .store
            .insert(copy)
            .await
            .map_err(ServiceError::ShareFailed)?;

        tracing::info!(
            source_id = %id,
            shared_id = %shared.id,
            sender = %sender,
            recipient = %recipient,
            "Note shared"
        );
        Ok(shared)
    }

    /// Searches the username's notes with the strategy selected by the
    /// query type.
    ///
    /// Any strategy failure — including the default strategy's
    /// zero-owned-notes NotFound — is wrapped as
    /// [`ServiceError::SearchFailed`]. Callers cannot distinguish the root
    /// kind through this path; the cause is kept as `source` for
    /// diagnostics.
    pub async fn search(
        &self,
        query: &str,
        query_type: QueryType,
        username: &str,
    ) -> ServiceResult<Vec<Note>> {
        self.limiter.check(ops::SEARCH_NOTES)?;

        let strategy = self.registry.strategy_for(query_type);
        let results = strategy
            .search(self.store.as_ref(), query, username)
            .await
            .map_err(|e| ServiceError::SearchFailed(Box::new(e)))?;

        tracing::debug!(
            query_type = %query_type,
            owner = %username,
            hits = results.len(),
            "Search completed"
        );
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jotter_store::{MemoryNoteStore, MemoryUserDirectory};

    fn service() -> NoteService<MemoryNoteStore, MemoryUserDirectory> {
        NoteService::new(
            Arc::new(MemoryNoteStore::new()),
            Arc::new(MemoryUserDirectory::new()),
        )
    }

    fn draft(title: &str, content: &str, labels: &[&str], owner: &str) -> NewNote {
        NewNote::new(
            title,
            content,
            labels.iter().map(|s| s.to_string()).collect(),
            owner,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_create_returns_stored_form() {
        let service = service();
        let note = service
            .create(draft("T", "hello", &["x"], "alice"))
            .await
            .unwrap();

        assert_eq!(note.title, "T");
        assert_eq!(note.owner, "alice");
    }

    #[tokio::test]
    async fn test_get_by_id_scoped_to_owner() {
        let service = service();
        let note = service
            .create(draft("T", "hello", &[], "alice"))
            .await
            .unwrap();

        let found = service.get_by_id(note.id, "alice").await.unwrap();
        assert_eq!(found, note);

        let err = service.get_by_id(note.id, "bob").await.unwrap_err();
        assert!(matches!(err, ServiceError::NoteNotFound(id) if id == note.id));
    }

    #[tokio::test]
    async fn test_get_all_zero_notes_is_not_found() {
        let service = service();

        let err = service.get_all("alice").await.unwrap_err();
        assert!(matches!(err, ServiceError::NoNotesForUser(ref u) if u == "alice"));

        service
            .create(draft("T", "hello", &[], "alice"))
            .await
            .unwrap();
        assert_eq!(service.get_all("alice").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_overwrites_only_mutable_fields() {
        let service = service();
        let note = service
            .create(draft("T", "hello", &["x"], "alice"))
            .await
            .unwrap();

        let updated = service
            .update(
                note.id,
                "alice",
                NotePatch {
                    title: "T2".to_string(),
                    content: "changed".to_string(),
                    labels: vec!["y".to_string()],
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id, note.id);
        assert_eq!(updated.owner, note.owner);
        assert_eq!(updated.created, note.created);
        assert_eq!(updated.title, "T2");
        assert_eq!(updated.content, "changed");
        assert_eq!(updated.labels, vec!["y".to_string()]);
    }

    #[tokio::test]
    async fn test_update_missing_note_leaves_store_untouched() {
        let service = service();
        let note = service
            .create(draft("T", "hello", &[], "alice"))
            .await
            .unwrap();

        let err = service
            .update(
                note.id,
                "bob",
                NotePatch {
                    title: "hijack".to_string(),
                    content: String::new(),
                    labels: vec![],
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NoteNotFound(_)));

        // The note is unchanged under its real owner.
        let unchanged = service.get_by_id(note.id, "alice").await.unwrap();
        assert_eq!(unchanged, note);
    }

    #[tokio::test]
    async fn test_delete_then_get_fails_not_found() {
        let service = service();
        let note = service
            .create(draft("T", "hello", &[], "alice"))
            .await
            .unwrap();

        service.delete(note.id, "alice").await.unwrap();

        let err = service.get_by_id(note.id, "alice").await.unwrap_err();
        assert!(matches!(err, ServiceError::NoteNotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_scoped_to_owner() {
        let service = service();
        let note = service
            .create(draft("T", "hello", &[], "alice"))
            .await
            .unwrap();

        let err = service.delete(note.id, "bob").await.unwrap_err();
        assert!(matches!(err, ServiceError::NoteNotFound(_)));

        // Still reachable by the real owner.
        assert!(service.get_by_id(note.id, "alice").await.is_ok());
    }

    #[tokio::test]
    async fn test_rate_limit_rejects_eleventh_call() {
        let service = service();
        let note = service
            .create(draft("T", "hello", &[], "alice"))
            .await
            .unwrap();

        for _ in 0..10 {
            service.get_by_id(note.id, "alice").await.unwrap();
        }

        let err = service.get_by_id(note.id, "alice").await.unwrap_err();
        assert!(matches!(
            err,
            ServiceError::RateLimitExceeded {
                operation: ops::GET_NOTE_BY_ID
            }
        ));

        // Other operations keep their own quota.
        assert!(service.get_all("alice").await.is_ok());
    }
}
