//! Search error types.

use thiserror::Error;

/// Errors from the search provider boundary.
///
/// The [`Retriever`](crate::Retriever) converts every variant into fallback
/// evidence; callers of [`Retriever::try_search`](crate::Retriever::try_search)
/// see them directly.
#[derive(Debug, Error)]
pub enum SearchError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Search API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the provider.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The provider returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// Failed to parse a provider response.
    #[error("parse error: {0}")]
    Parse(String),

    /// No API key is configured for the provider.
    #[error("search provider is not configured")]
    NotConfigured,

    /// The query succeeded but produced no results.
    #[error("no results for query: {query}")]
    NoResults { query: String },
}
