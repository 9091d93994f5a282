//! Service error types.
//!
//! NotFound kinds are raised at the failing lookup and propagate unmodified
//! to the caller boundary. `ShareFailed` and `SearchFailed` are explicit
//! wrap points: a subordinate failure never crosses the share or search
//! boundary as its original type, but the cause is retained as `source` for
//! diagnostics. This coarsening on the search path is a documented part of
//! the contract: callers cannot distinguish "no matches for the default
//! strategy" from a store failure through `search`.

use jotter_core::{InvalidNote, NoteId};
use jotter_store::StoreError;
use thiserror::Error;

/// Result type for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors that can occur during note operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// No note matches the given id for the given owner.
    #[error("note {0} not found")]
    NoteNotFound(NoteId),

    /// The user owns zero notes (list and default-search only).
    #[error("no notes found for user: {0}")]
    NoNotesForUser(String),

    /// The share recipient does not exist in the user directory.
    #[error("user {0} not found")]
    UserNotFound(String),

    /// The copy-persist step of a share failed.
    #[error("error occurred during note sharing")]
    ShareFailed(#[source] StoreError),

    /// A search strategy failed; the cause is not distinguished to the
    /// caller.
    #[error("error occurred during note search")]
    SearchFailed(#[source] Box<ServiceError>),

    /// Quota exhausted for the named operation. The underlying operation
    /// was never attempted.
    #[error("rate limit exceeded for operation {operation}")]
    RateLimitExceeded {
        /// The throttled operation name.
        operation: &'static str,
    },

    /// A store failure on a path without an explicit wrap boundary.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Note input failed validation.
    #[error(transparent)]
    InvalidNote(#[from] InvalidNote),
}

impl ServiceError {
    /// Get a stable machine-readable code for this error, for callers that
    /// map error kinds to user-facing statuses.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NoteNotFound(_) => "NOTE_NOT_FOUND",
            Self::NoNotesForUser(_) => "NO_NOTES_FOUND",
            Self::UserNotFound(_) => "USER_NOT_FOUND",
            Self::ShareFailed(_) => "SHARE_FAILED",
            Self::SearchFailed(_) => "SEARCH_FAILED",
            Self::RateLimitExceeded { .. } => "RATE_LIMIT_EXCEEDED",
            Self::Store(_) => "STORAGE_ERROR",
            Self::InvalidNote(_) => "INVALID_NOTE",
        }
    }

    /// Whether this error is one of the NotFound kinds.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::NoteNotFound(_) | Self::NoNotesForUser(_) | Self::UserNotFound(_)
        )
    }
}
