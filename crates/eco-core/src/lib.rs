//! # eco-core
//!
//! Core types shared across all EcoLens crates:
//! - [`ComparisonRequest`]: the two subjects to compare plus an optional credential
//! - [`Evidence`]: unstructured search context handed from the Retriever to the Synthesizer
//! - [`Report`]: the final markdown comparison
//! - [`SessionRecord`] / [`SessionLog`]: the append-only record of completed comparisons

pub mod evidence;
pub mod report;
pub mod request;
pub mod session;

pub use evidence::{Evidence, EvidenceSource};
pub use report::{Report, ReportMode};
pub use request::ComparisonRequest;
pub use session::{SessionLog, SessionRecord};
