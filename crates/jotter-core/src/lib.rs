//! jotter-core: Domain types for the jotter note engine.
//!
//! This crate defines the fundamental types shared by the storage and
//! service layers:
//!
//! - [`NoteId`]: typed UUID identifier for notes
//! - [`Note`]: a stored note record with owner and timestamp
//! - [`NewNote`]: a note before the store has assigned id and timestamp
//! - [`NotePatch`]: the mutable subset of a note (title, content, labels)
//! - [`User`]: a directory entry; only existence is consulted
//! - [`QueryType`]: the closed search query-type tag set
//!
//! All types derive `Debug`, `Clone`, `Serialize`, and `Deserialize` for
//! inspection, copying, and JSON serialization.

pub mod query;
pub mod types;

pub use query::QueryType;
pub use types::{InvalidNote, NewNote, Note, NoteId, NotePatch, User};
