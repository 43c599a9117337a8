use eco_core::SessionLog;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::CompareArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::StageProgress;

pub async fn handle(args: &CompareArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let request = ctx.request(
        args.subject_a.as_str(),
        args.subject_b.as_str(),
        args.api_key.as_deref(),
    );

    // One-shot run: the log lives only for this invocation.
    let mut log = SessionLog::new();
    let mut stages = StageProgress::default();
    let comparison = ctx
        .pipeline
        .run_observed(&request, &mut log, |stage| stages.observe(stage))
        .await;

    output(&comparison, flags.format)
}
