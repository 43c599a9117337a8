//! # eco-pipeline
//!
//! Orchestrates one comparison: the scout ([`Retriever`]) runs to completion,
//! its evidence is handed to the analyst ([`Synthesizer`]), and the finished
//! comparison is appended to the caller's [`SessionLog`].
//!
//! Neither stage fails outward, so [`Pipeline::run`] always returns a
//! [`Comparison`]. Degraded conditions show up as fallback evidence or a
//! fallback/degraded report, never as an error.

use std::time::Duration;

use eco_analyst::{ChatModel, Synthesizer};
use eco_core::{ComparisonRequest, Evidence, Report, SessionLog, SessionRecord};
use eco_search::{Retriever, SearchProvider};
use serde::Serialize;

/// Progress notifications, emitted in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage<'a> {
    Searching,
    Searched(&'a Evidence),
    Analyzing,
    Analyzed(&'a Report),
}

/// Everything produced by one pipeline run.
#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    pub request: ComparisonRequest,
    pub evidence: Evidence,
    pub report: Report,
    pub record: SessionRecord,
}

pub struct Pipeline<P, M> {
    retriever: Retriever<P>,
    model: M,
    model_id: Option<String>,
    fallback_delay: Option<Duration>,
}

impl<P, M> Pipeline<P, M>
where
    P: SearchProvider + Sync,
    M: ChatModel + Clone + Sync,
{
    pub const fn new(provider: P, model: M) -> Self {
        Self {
            retriever: Retriever::new(provider),
            model,
            model_id: None,
            fallback_delay: None,
        }
    }

    #[must_use]
    pub fn with_model_id(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = Some(model_id.into());
        self
    }

    #[must_use]
    pub const fn with_fallback_delay(mut self, delay: Duration) -> Self {
        self.fallback_delay = Some(delay);
        self
    }

    pub const fn retriever(&self) -> &Retriever<P> {
        &self.retriever
    }

    /// Analyst for `request`: live only when the request carries a credential.
    pub fn synthesizer_for(&self, request: &ComparisonRequest) -> Synthesizer<M> {
        let mut synthesizer = Synthesizer::new(
            self.model.clone(),
            request.credential().map(str::to_string),
        );
        if let Some(model_id) = &self.model_id {
            synthesizer = synthesizer.with_model_id(model_id.clone());
        }
        if let Some(delay) = self.fallback_delay {
            synthesizer = synthesizer.with_fallback_delay(delay);
        }
        synthesizer
    }

    pub async fn run(&self, request: &ComparisonRequest, log: &mut SessionLog) -> Comparison {
        self.run_observed(request, log, |_| {}).await
    }

    /// Run both stages in sequence, reporting each boundary to `on_stage`.
    pub async fn run_observed(
        &self,
        request: &ComparisonRequest,
        log: &mut SessionLog,
        mut on_stage: impl FnMut(Stage<'_>),
    ) -> Comparison {
        let (a, b) = (request.subject_a(), request.subject_b());

        on_stage(Stage::Searching);
        let evidence = self.retriever.search(a, b).await;
        tracing::debug!(source = ?evidence.source(), "evidence ready");
        on_stage(Stage::Searched(&evidence));

        on_stage(Stage::Analyzing);
        let synthesizer = self.synthesizer_for(request);
        let report = synthesizer.analyze(evidence.clone(), a, b).await;
        tracing::debug!(mode = ?report.mode(), "report ready");
        on_stage(Stage::Analyzed(&report));

        let record = SessionRecord::now(request);
        log.append(record.clone());

        Comparison {
            request: request.clone(),
            evidence,
            report,
            record,
        }
    }
}
