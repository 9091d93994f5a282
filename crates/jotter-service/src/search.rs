//! Search strategy dispatch.
//!
//! Strategies form a closed set, modeled as a tagged union so execution is
//! an exhaustive match. The registry maps query-type tags to strategies and
//! is populated once at construction; lookup falls back unconditionally to
//! the default strategy, so an unrecognized tag degrades to "return every
//! owned note" rather than failing. That fallback is load-bearing: callers
//! rely on garbage tags behaving like a plain listing.

use std::collections::HashMap;

use jotter_core::{Note, QueryType};
use jotter_store::NoteStore;

use crate::error::{ServiceError, ServiceResult};

/// A search algorithm selected by query-type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStrategy {
    /// Case-sensitive literal substring match against note content.
    Content,
    /// Exact match of the query against a single note label.
    Label,
    /// Ignores the query text and returns every note the user owns;
    /// fails with [`ServiceError::NoNotesForUser`] when they own none.
    Default,
}

impl SearchStrategy {
    /// Executes this strategy against the store, scoped to the username.
    pub async fn search<S: NoteStore>(
        self,
        store: &S,
        query: &str,
        username: &str,
    ) -> ServiceResult<Vec<Note>> {
        match self {
            Self::Content => Ok(store
                .find_by_content_containing_and_username(query, username)
                .await?),
            Self::Label => {
                let candidates = [query.to_string()];
                Ok(store
                    .find_by_labels_in_and_username(&candidates, username)
                    .await?)
            }
            Self::Default => store
                .find_by_username(username)
                .await?
                .ok_or_else(|| ServiceError::NoNotesForUser(username.to_string())),
        }
    }
}

/// Fixed mapping from query-type tag to search strategy.
///
/// Populated once at construction and read-only thereafter; safe for
/// unsynchronized concurrent reads.
#[derive(Debug)]
pub struct SearchStrategyRegistry {
    strategies: HashMap<QueryType, SearchStrategy>,
    fallback: SearchStrategy,
}

impl SearchStrategyRegistry {
    /// Creates the registry with the standard strategy set.
    #[must_use]
    pub fn new() -> Self {
        let mut strategies = HashMap::new();
        strategies.insert(QueryType::Content, SearchStrategy::Content);
        strategies.insert(QueryType::Label, SearchStrategy::Label);

        Self {
            strategies,
            fallback: SearchStrategy::Default,
        }
    }

    /// Resolves the strategy for a query type.
    ///
    /// O(1) map access with an unconditional fallback; never fails on an
    /// unmapped tag.
    #[must_use]
    pub fn strategy_for(&self, query_type: QueryType) -> SearchStrategy {
        self.strategies
            .get(&query_type)
            .copied()
            .unwrap_or(self.fallback)
    }
}

impl Default for SearchStrategyRegistry {
    fn default() -> Self {
        Self::new()
    }
}
