use serde::{Deserialize, Serialize};

/// A single comparison between two subjects (typically materials).
///
/// Subject names are free-form and not validated. The credential is the
/// generation-provider API key for this request; it is never serialized and
/// is redacted from `Debug` output.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonRequest {
    subject_a: String,
    subject_b: String,
    #[serde(skip)]
    credential: Option<String>,
}

impl std::fmt::Debug for ComparisonRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComparisonRequest")
            .field("subject_a", &self.subject_a)
            .field("subject_b", &self.subject_b)
            .field("credential", &self.credential.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl ComparisonRequest {
    #[must_use]
    pub fn new(subject_a: impl Into<String>, subject_b: impl Into<String>) -> Self {
        Self {
            subject_a: subject_a.into(),
            subject_b: subject_b.into(),
            credential: None,
        }
    }

    /// Attach a credential. Blank values are treated as absent.
    #[must_use]
    pub fn with_credential(mut self, credential: Option<String>) -> Self {
        self.credential = credential.filter(|value| !value.trim().is_empty());
        self
    }

    #[must_use]
    pub fn subject_a(&self) -> &str {
        &self.subject_a
    }

    #[must_use]
    pub fn subject_b(&self) -> &str {
        &self.subject_b
    }

    #[must_use]
    pub fn credential(&self) -> Option<&str> {
        self.credential.as_deref()
    }

    /// Human-readable label, e.g. `Bamboo Fiber vs Cotton`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} vs {}", self.subject_a, self.subject_b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_credential_is_absent() {
        let request = ComparisonRequest::new("Glass", "PET").with_credential(Some("   ".into()));
        assert!(request.credential().is_none());
    }

    #[test]
    fn credential_is_kept() {
        let request = ComparisonRequest::new("Glass", "PET").with_credential(Some("sk-1".into()));
        assert_eq!(request.credential(), Some("sk-1"));
    }

    #[test]
    fn label_joins_subjects() {
        let request = ComparisonRequest::new("Bamboo Fiber", "Cotton");
        assert_eq!(request.label(), "Bamboo Fiber vs Cotton");
    }

    #[test]
    fn debug_redacts_credential() {
        let request =
            ComparisonRequest::new("Glass", "PET").with_credential(Some("sk-secret".into()));
        let debug = format!("{request:?}");
        assert!(!debug.contains("sk-secret"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn credential_never_serialized() {
        let request =
            ComparisonRequest::new("Glass", "PET").with_credential(Some("sk-secret".into()));
        let json = serde_json::to_string(&request).unwrap();
        assert!(!json.contains("sk-secret"));
        assert!(json.contains("\"subject_a\":\"Glass\""));
    }
}
