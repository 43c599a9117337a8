//! Search provider boundary.

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::SearchError;

/// One web search result, in provider order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub title: String,
    pub url: String,
    pub description: String,
}

/// An external web search service.
///
/// Implementations make exactly one attempt per call and return hits in the
/// order the provider ranked them.
pub trait SearchProvider {
    /// Run `query`, returning at most `limit` hits.
    fn search(
        &self,
        query: &str,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<SearchHit>, SearchError>> + Send;
}
