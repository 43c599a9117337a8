//! # eco-search
//!
//! Evidence retrieval for EcoLens.
//!
//! The [`Retriever`] runs a single life-cycle-assessment web search for two
//! subjects through a [`SearchProvider`] and renders the hits as plain text.
//! Provider errors and empty result sets both fall back to deterministic
//! canned evidence, so [`Retriever::search`] never fails.
//!
//! Providers:
//! - [`BraveSearch`]: Brave Web Search API

mod brave;
mod error;
mod http;
mod provider;
mod retriever;

pub use brave::BraveSearch;
pub use error::SearchError;
pub use provider::{SearchHit, SearchProvider};
pub use retriever::{
    FALLBACK_MARKER, MAX_RESULTS, Retriever, build_query, fallback_evidence, format_hits,
};
