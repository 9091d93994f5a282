//! Note and user record types.
//!
//! A note passes through two shapes: [`NewNote`] before insertion (no id,
//! no timestamp — the store assigns both) and [`Note`] afterwards. Updates
//! go through [`NotePatch`], which by construction can only carry the three
//! mutable fields, so id, owner, and creation time cannot be overwritten by
//! caller input.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

// ============================================================================
// ID Types
// ============================================================================

/// Unique identifier for a note.
///
/// Wraps a UUID v4, providing type safety to distinguish note IDs from
/// other string- or UUID-based values in the system. Assigned by the store
/// on insert and immutable thereafter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(pub Uuid);

impl NoteId {
    /// Creates a new random NoteId using UUID v4.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a NoteId from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for NoteId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NoteId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

// ============================================================================
// Note Records
// ============================================================================

/// A stored note record.
///
/// Invariant: a note is associated with exactly one owning username. The
/// service layer never returns, mutates, or deletes a note through an
/// operation performed under any other username.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Store-assigned identifier, immutable once set.
    pub id: NoteId,
    /// Title of the note. Never empty.
    pub title: String,
    /// Free-text content.
    pub content: String,
    /// Ordered list of label strings.
    pub labels: Vec<String>,
    /// Username of the owning user. Immutable after creation.
    pub owner: String,
    /// Store-assigned creation timestamp, immutable.
    pub created: DateTime<Utc>,
}

impl Note {
    /// Overwrites exactly the three mutable fields from a patch.
    ///
    /// Leaves id, owner, and creation timestamp untouched.
    pub fn apply(&mut self, patch: NotePatch) {
        self.title = patch.title;
        self.content = patch.content;
        self.labels = patch.labels;
    }
}

/// A note before the store has assigned an id and creation timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewNote {
    /// Title of the note. Never empty.
    pub title: String,
    /// Free-text content.
    pub content: String,
    /// Ordered list of label strings.
    pub labels: Vec<String>,
    /// Username of the owning user. Never empty.
    pub owner: String,
}

impl NewNote {
    /// Creates a new note draft, validating that title and owner are
    /// non-empty.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        labels: Vec<String>,
        owner: impl Into<String>,
    ) -> Result<Self, InvalidNote> {
        let title = title.into();
        let owner = owner.into();

        if title.trim().is_empty() {
            return Err(InvalidNote::EmptyTitle);
        }
        if owner.trim().is_empty() {
            return Err(InvalidNote::EmptyOwner);
        }

        Ok(Self {
            title,
            content: content.into(),
            labels,
            owner,
        })
    }
}

/// The mutable subset of a note: title, content, and labels.
///
/// An update request is reduced to this type before it reaches the service,
/// so stray id/owner/timestamp values in caller input are dropped rather
/// than ignored at write time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotePatch {
    /// Replacement title.
    pub title: String,
    /// Replacement content.
    pub content: String,
    /// Replacement label list.
    pub labels: Vec<String>,
}

/// Validation failures for note input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidNote {
    /// The title was empty or whitespace-only.
    #[error("note title must not be empty")]
    EmptyTitle,
    /// The owner username was empty or whitespace-only.
    #[error("note owner must not be empty")]
    EmptyOwner,
}

// ============================================================================
// Users
// ============================================================================

/// A user directory entry.
///
/// The engine consults the directory for one fact only: whether a username
/// exists. Credentials and profile data live in the excluded auth layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique username.
    pub username: String,
}

impl User {
    /// Creates a directory entry for the given username.
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_note() -> Note {
        Note {
            id: NoteId::new(),
            title: "T".to_string(),
            content: "hello world".to_string(),
            labels: vec!["x".to_string()],
            owner: "alice".to_string(),
            created: Utc::now(),
        }
    }

    #[test]
    fn test_note_id_display_round_trip() {
        let id = NoteId::new();
        let parsed: NoteId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_note_id_serde_transparent() {
        let id = NoteId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id));
    }

    #[test]
    fn test_new_note_rejects_empty_title() {
        let result = NewNote::new("", "content", vec![], "alice");
        assert_eq!(result.unwrap_err(), InvalidNote::EmptyTitle);

        let result = NewNote::new("   ", "content", vec![], "alice");
        assert_eq!(result.unwrap_err(), InvalidNote::EmptyTitle);
    }

    #[test]
    fn test_new_note_rejects_empty_owner() {
        let result = NewNote::new("T", "content", vec![], "");
        assert_eq!(result.unwrap_err(), InvalidNote::EmptyOwner);
    }

    #[test]
    fn test_new_note_valid() {
        let note = NewNote::new("T", "hello", vec!["x".to_string()], "alice").unwrap();
        assert_eq!(note.title, "T");
        assert_eq!(note.owner, "alice");
    }

    #[test]
    fn test_apply_patch_preserves_identity_fields() {
        let mut note = sample_note();
        let id = note.id;
        let owner = note.owner.clone();
        let created = note.created;

        note.apply(NotePatch {
            title: "new title".to_string(),
            content: "new content".to_string(),
            labels: vec!["a".to_string(), "b".to_string()],
        });

        assert_eq!(note.id, id);
        assert_eq!(note.owner, owner);
        assert_eq!(note.created, created);
        assert_eq!(note.title, "new title");
        assert_eq!(note.content, "new content");
        assert_eq!(note.labels, vec!["a".to_string(), "b".to_string()]);
    }
}
