use eco_core::Evidence;
use eco_search::build_query;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::EvidenceArgs;
use crate::context::AppContext;
use crate::output::{AsMarkdown, output};
use crate::progress::Progress;

#[derive(Debug, Serialize)]
struct EvidenceResponse {
    query: String,
    evidence: Evidence,
}

impl AsMarkdown for EvidenceResponse {
    fn as_markdown(&self) -> String {
        self.evidence.as_str().to_string()
    }
}

pub async fn handle(args: &EvidenceArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let spinner = Progress::spinner("Agent 1 (Scout): searching for life cycle data...");
    let evidence = ctx
        .pipeline
        .retriever()
        .search(&args.subject_a, &args.subject_b)
        .await;
    spinner.finish_ok("Search complete.");

    output(
        &EvidenceResponse {
            query: build_query(&args.subject_a, &args.subject_b),
            evidence,
        },
        flags.format,
    )
}
