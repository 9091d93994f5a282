//! Error types for the storage layer.

use thiserror::Error;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur during storage operations.
///
/// Absence is not an error at this layer: lookups return `Option`, and the
/// service layer decides which absences are NotFound conditions. A
/// `StoreError` always means the backend itself failed.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend failed (connectivity loss, timeout, I/O). Opaque to the
    /// engine; surfaces to callers as a generic service error.
    #[error("storage backend error: {0}")]
    Backend(String),
}
