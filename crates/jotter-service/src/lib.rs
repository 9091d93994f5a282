//! jotter-service: The note access-control and retrieval engine.
//!
//! This crate provides:
//! - [`NoteService`]: ownership-scoped CRUD, sharing, and search dispatch
//! - [`SearchStrategyRegistry`]: query-type tag to search strategy mapping
//! - [`RateLimiter`]: per-operation token-bucket throttling
//! - [`ServiceError`]: the error surface exposed to callers
//! - [`ServiceConfig`]: environment-driven configuration
//!
//! # Architecture
//!
//! The service is generic over its two collaborators, a
//! [`NoteStore`](jotter_store::NoteStore) and a
//! [`UserDirectory`](jotter_store::UserDirectory), both injected at
//! construction. The strategy registry and the rate limiter are owned by
//! the service instance; there is no process-global state. Every public
//! operation consumes one rate-limiter token for its operation name before
//! touching the store.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use jotter_service::{NoteService, ServiceConfig};
//! use jotter_store::{MemoryNoteStore, MemoryUserDirectory};
//!
//! let service = NoteService::with_config(
//!     Arc::new(MemoryNoteStore::new()),
//!     Arc::new(MemoryUserDirectory::new()),
//!     ServiceConfig::from_env()?,
//! );
//! let note = service.create(new_note).await?;
//! ```

pub mod config;
pub mod error;
pub mod ratelimit;
pub mod search;
pub mod service;

pub use config::{ConfigError, ServiceConfig};
pub use error::{ServiceError, ServiceResult};
pub use ratelimit::{RateLimitPolicy, RateLimiter};
pub use search::{SearchStrategy, SearchStrategyRegistry};
pub use service::{NoteService, ops};

// Re-export dependent crates
pub use jotter_core;
pub use jotter_store;
