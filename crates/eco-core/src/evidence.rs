use serde::{Deserialize, Serialize};

/// Where a block of evidence came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceSource {
    /// Live search results.
    Live,
    /// Deterministic canned text used when search is unavailable.
    Fallback,
}

/// Unstructured textual context about two subjects.
///
/// Consumers treat `text` as opaque; it has no guaranteed internal structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evidence {
    text: String,
    source: EvidenceSource,
}

impl Evidence {
    #[must_use]
    pub fn live(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: EvidenceSource::Live,
        }
    }

    #[must_use]
    pub fn fallback(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: EvidenceSource::Fallback,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub const fn source(&self) -> EvidenceSource {
        self.source
    }

    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.source == EvidenceSource::Fallback
    }

    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }
}

impl std::fmt::Display for Evidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
