//! The analyst stage: evidence in, markdown report out.

use std::time::Duration;

use eco_core::{Evidence, Report, ReportMode};

use crate::{
    AnalystError, ChatModel,
    prompt::{DEFAULT_MODEL, build_request},
    template::{degraded_report, fallback_report},
};

const DEFAULT_FALLBACK_DELAY: Duration = Duration::from_secs(2);

/// Generation backend, chosen once at construction.
#[derive(Debug, Clone)]
pub enum Backend<M> {
    /// A chat model plus the credential to call it with.
    Live { model: M, credential: String },
    /// No generation available; every report is templated.
    Offline,
}

/// Turns evidence about two subjects into a markdown report.
#[derive(Debug, Clone)]
pub struct Synthesizer<M> {
    backend: Backend<M>,
    model_id: String,
    fallback_delay: Duration,
}

impl<M: ChatModel + Sync> Synthesizer<M> {
    /// Live when `credential` is present and non-blank, offline otherwise.
    pub fn new(model: M, credential: Option<String>) -> Self {
        let backend = match credential.filter(|c| !c.trim().is_empty()) {
            Some(credential) => Backend::Live { model, credential },
            None => Backend::Offline,
        };
        Self::with_backend(backend)
    }

    pub fn offline() -> Self {
        Self::with_backend(Backend::Offline)
    }

    fn with_backend(backend: Backend<M>) -> Self {
        Self {
            backend,
            model_id: DEFAULT_MODEL.to_string(),
            fallback_delay: DEFAULT_FALLBACK_DELAY,
        }
    }

    #[must_use]
    pub fn with_model_id(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = model_id.into();
        self
    }

    /// Cosmetic pause before an offline report is returned.
    #[must_use]
    pub const fn with_fallback_delay(mut self, delay: Duration) -> Self {
        self.fallback_delay = delay;
        self
    }

    #[must_use]
    pub const fn is_live(&self) -> bool {
        matches!(self.backend, Backend::Live { .. })
    }

    /// Produce a report, surfacing a live-call failure as an error.
    ///
    /// Offline backends always succeed with the templated report.
    ///
    /// # Errors
    ///
    /// Returns the [`AnalystError`] raised by the generation call.
    pub async fn try_analyze(
        &self,
        evidence: &Evidence,
        subject_a: &str,
        subject_b: &str,
    ) -> Result<Report, AnalystError> {
        match &self.backend {
            Backend::Offline => {
                tracing::debug!("no generation backend; using templated analysis");
                if !self.fallback_delay.is_zero() {
                    tokio::time::sleep(self.fallback_delay).await;
                }
                Ok(Report::new(
                    fallback_report(subject_a, subject_b),
                    ReportMode::Fallback,
                ))
            }
            Backend::Live { model, credential } => {
                let request =
                    build_request(&self.model_id, subject_a, subject_b, evidence.as_str());
                let text = model.complete(&request, credential).await?;
                Ok(Report::new(text, ReportMode::Live))
            }
        }
    }

    /// Produce a report. Never fails: a live-call failure yields the templated
    /// report prefixed with an explicit error line.
    pub async fn analyze(&self, evidence: Evidence, subject_a: &str, subject_b: &str) -> Report {
        match self.try_analyze(&evidence, subject_a, subject_b).await {
            Ok(report) => report,
            Err(error) => {
                tracing::warn!(%error, "generation failed; falling back to templated analysis");
                let reason = error.to_string();
                Report::new(
                    degraded_report(&reason, subject_a, subject_b),
                    ReportMode::Degraded { reason },
                )
            }
        }
    }
}
