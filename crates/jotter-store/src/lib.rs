//! jotter-store: Storage abstraction for the jotter note engine.
//!
//! This crate provides:
//! - The [`NoteStore`] trait: keyed, owner-scoped note storage
//! - The [`UserDirectory`] trait: username existence lookups
//! - [`MemoryNoteStore`] / [`MemoryUserDirectory`]: in-memory reference
//!   implementations used by tests and embedders
//!
//! # Architecture
//!
//! The engine treats persistence as opaque: every query the service layer
//! needs is a method on [`NoteStore`], and a store call is the only
//! suspension point in any operation. Implementations own their concurrency
//! control; the reference implementations guard a single structure with
//! `tokio::sync::RwLock`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use jotter_store::{MemoryNoteStore, NoteStore};
//!
//! let store = MemoryNoteStore::new();
//! let note = store.insert(new_note).await?;
//! let found = store.find_by_id_and_username(note.id, "alice").await?;
//! ```

pub mod error;
pub mod memory;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use memory::{MemoryNoteStore, MemoryUserDirectory};
pub use store::{NoteStore, UserDirectory};

// Re-export jotter-core for downstream crates
pub use jotter_core;
