use serde::{Deserialize, Serialize};

/// How a report was produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReportMode {
    /// Generated by the live text-generation backend.
    Live,
    /// Templated report; no generation call was attempted.
    Fallback,
    /// The generation call failed; the report carries the error and the template.
    Degraded { reason: String },
}

/// Final markdown comparison shown to the operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    markdown: String,
    mode: ReportMode,
}

impl Report {
    #[must_use]
    pub fn new(markdown: impl Into<String>, mode: ReportMode) -> Self {
        Self {
            markdown: markdown.into(),
            mode,
        }
    }

    #[must_use]
    pub fn markdown(&self) -> &str {
        &self.markdown
    }

    #[must_use]
    pub const fn mode(&self) -> &ReportMode {
        &self.mode
    }

    #[must_use]
    pub fn into_markdown(self) -> String {
        self.markdown
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.markdown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degraded_mode_serializes_with_reason() {
        let report = Report::new(
            "body",
            ReportMode::Degraded {
                reason: "quota".into(),
            },
        );
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["mode"]["kind"], "degraded");
        assert_eq!(json["mode"]["reason"], "quota");
    }

    #[test]
    fn display_is_markdown() {
        let report = Report::new("| a | b |", ReportMode::Live);
        assert_eq!(report.to_string(), "| a | b |");
    }
}
