//! In-memory reference implementations of the storage traits.
//!
//! Backing structure is a plain `Vec` behind a `tokio::sync::RwLock`, so
//! store-native order is insertion order. These implementations never fail;
//! they exist for tests and embedders that do not need durability.

use std::collections::HashMap;

use chrono::Utc;
use tokio::sync::RwLock;

use jotter_core::{NewNote, Note, NoteId, User};

use crate::error::StoreResult;
use crate::store::{NoteStore, UserDirectory};

/// In-memory note store preserving insertion order.
#[derive(Debug, Default)]
pub struct MemoryNoteStore {
    notes: RwLock<Vec<Note>>,
}

impl MemoryNoteStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored notes, across all owners.
    pub async fn len(&self) -> usize {
        self.notes.read().await.len()
    }

    /// Whether the store holds no notes.
    pub async fn is_empty(&self) -> bool {
        self.notes.read().await.is_empty()
    }
}

impl NoteStore for MemoryNoteStore {
    async fn insert(&self, new: NewNote) -> StoreResult<Note> {
        let note = Note {
            id: NoteId::new(),
            title: new.title,
            content: new.content,
            labels: new.labels,
            owner: new.owner,
            created: Utc::now(),
        };
        self.notes.write().await.push(note.clone());
        Ok(note)
    }

    async fn save(&self, note: &Note) -> StoreResult<Note> {
        let mut notes = self.notes.write().await;
        match notes.iter_mut().find(|n| n.id == note.id) {
            Some(existing) => *existing = note.clone(),
            None => notes.push(note.clone()),
        }
        Ok(note.clone())
    }

    async fn find_by_id(&self, id: NoteId) -> StoreResult<Option<Note>> {
        let notes = self.notes.read().await;
        Ok(notes.iter().find(|n| n.id == id).cloned())
    }

    async fn find_by_id_and_username(
        &self,
        id: NoteId,
        username: &str,
    ) -> StoreResult<Option<Note>> {
        let notes = self.notes.read().await;
        Ok(notes
            .iter()
            .find(|n| n.id == id && n.owner == username)
            .cloned())
    }

    async fn find_by_username(&self, username: &str) -> StoreResult<Option<Vec<Note>>> {
        let notes = self.notes.read().await;
        let owned: Vec<Note> = notes.iter().filter(|n| n.owner == username).cloned().collect();
        Ok(if owned.is_empty() { None } else { Some(owned) })
    }

    async fn find_by_content_containing_and_username(
        &self,
        substring: &str,
        username: &str,
    ) -> StoreResult<Vec<Note>> {
        let notes = self.notes.read().await;
        Ok(notes
            .iter()
            .filter(|n| n.owner == username && n.content.contains(substring))
            .cloned()
            .collect())
    }

    async fn find_by_labels_in_and_username(
        &self,
        candidates: &[String],
        username: &str,
    ) -> StoreResult<Vec<Note>> {
        let notes = self.notes.read().await;
        Ok(notes
            .iter()
            .filter(|n| n.owner == username && n.labels.iter().any(|l| candidates.contains(l)))
            .cloned()
            .collect())
    }

    async fn delete_by_id(&self, id: NoteId) -> StoreResult<()> {
        self.notes.write().await.retain(|n| n.id != id);
        Ok(())
    }
}

/// In-memory user directory.
#[derive(Debug, Default)]
pub struct MemoryUserDirectory {
    users: RwLock<HashMap<String, User>>,
}

impl MemoryUserDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a username in the directory.
    pub async fn add_user(&self, username: impl Into<String>) {
        let username = username.into();
        self.users
            .write()
            .await
            .insert(username.clone(), User::new(username));
    }
}

impl UserDirectory for MemoryUserDirectory {
    async fn find_by_username(&self, username: &str) -> StoreResult<Option<User>> {
        Ok(self.users.read().await.get(username).cloned())
    }
}
