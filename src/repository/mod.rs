//! Seam to the query layer that reports how many rows a filter matches.

use crate::domain::search_keys::SearchKeys;
use crate::repository::errors::RepositoryResult;

pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

/// Counts the results matching a search filter.
///
/// Paging never runs queries itself; services ask a counter after decoding a
/// token and feed the answer back into the paging state.
pub trait SearchCounter<K: SearchKeys> {
    fn count_matches(&self, keys: &K) -> RepositoryResult<usize>;
}
