use eco_core::{EvidenceSource, ReportMode};
use eco_pipeline::Stage;
use indicatif::{ProgressBar, ProgressStyle};

use crate::ui;

pub struct Progress {
    bar: Option<ProgressBar>,
}

impl Progress {
    #[must_use]
    pub fn spinner(message: &str) -> Self {
        if !ui::prefs().progress {
            return Self { bar: None };
        }

        let bar = ProgressBar::new_spinner();
        bar.enable_steady_tick(std::time::Duration::from_millis(100));
        bar.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message(message.to_string());
        Self { bar: Some(bar) }
    }

    pub fn finish_ok(&self, message: &str) {
        if let Some(bar) = &self.bar {
            bar.finish_with_message(message.to_string());
        }
    }
}

/// Spinner per pipeline stage, driven by [`eco_pipeline::Pipeline::run_observed`].
#[derive(Default)]
pub struct StageProgress {
    current: Option<Progress>,
}

impl StageProgress {
    pub fn observe(&mut self, stage: Stage<'_>) {
        match stage {
            Stage::Searching => {
                self.current = Some(Progress::spinner(
                    "Agent 1 (Scout): searching for life cycle data...",
                ));
            }
            Stage::Searched(evidence) => self.finish(searched_message(evidence.source())),
            Stage::Analyzing => {
                self.current = Some(Progress::spinner(
                    "Agent 2 (Analyst): synthesizing decision matrix...",
                ));
            }
            Stage::Analyzed(report) => self.finish(analyzed_message(report.mode())),
        }
    }

    fn finish(&mut self, message: &str) {
        if let Some(progress) = self.current.take() {
            progress.finish_ok(message);
        }
    }
}

fn searched_message(source: EvidenceSource) -> &'static str {
    match source {
        EvidenceSource::Live => "Search complete. Handing off to analyst.",
        EvidenceSource::Fallback => "Live search unavailable; using fallback evidence.",
    }
}

fn analyzed_message(mode: &ReportMode) -> &'static str {
    match mode {
        ReportMode::Live => "Decision matrix generated.",
        ReportMode::Fallback => "Decision matrix generated (safe mode).",
        ReportMode::Degraded { .. } => "AI analysis failed; showing manual analysis.",
    }
}
