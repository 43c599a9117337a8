use std::fmt::Write as _;

use eco_core::SessionLog;
use eco_pipeline::Comparison;
use serde::Serialize;

use crate::cli::OutputFormat;

/// Values with a human-facing markdown rendering.
pub trait AsMarkdown {
    fn as_markdown(&self) -> String;
}

impl AsMarkdown for Comparison {
    fn as_markdown(&self) -> String {
        self.report.markdown().to_string()
    }
}

/// Render a response to a string in the requested format.
pub fn render<T: Serialize + AsMarkdown>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Markdown => Ok(value.as_markdown()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
    }
}

/// Print a response in the requested format.
pub fn output<T: Serialize + AsMarkdown>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Enumerated session memory, oldest first.
pub fn render_session_log(log: &SessionLog) -> String {
    let mut text = String::from("Session memory:");
    if log.is_empty() {
        text.push_str("\n(no comparisons yet)");
    }
    for (i, record) in log.iter().enumerate() {
        let _ = write!(text, "\n{}. {record}", i + 1);
    }
    text
}
