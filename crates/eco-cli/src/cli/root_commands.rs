use clap::{Args, Subcommand};

/// Default subjects offered by the interactive session.
pub const DEFAULT_SUBJECT_A: &str = "Bamboo Fiber";
pub const DEFAULT_SUBJECT_B: &str = "Cotton";

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compare two materials and print the report.
    Compare(CompareArgs),
    /// Run only the scout stage and print the gathered evidence.
    Evidence(EvidenceArgs),
    /// Interactive session: run comparisons and keep a session memory.
    Session(SessionArgs),
}

#[derive(Debug, Args)]
pub struct CompareArgs {
    /// First material (e.g. "Bamboo Fiber").
    pub subject_a: String,
    /// Second material (e.g. "Cotton").
    pub subject_b: String,
    /// OpenAI API key for this run (overrides configuration).
    #[arg(long)]
    pub api_key: Option<String>,
}

#[derive(Debug, Args)]
pub struct EvidenceArgs {
    pub subject_a: String,
    pub subject_b: String,
}

#[derive(Debug, Args)]
pub struct SessionArgs {
    /// OpenAI API key for this session (overrides configuration).
    #[arg(long)]
    pub api_key: Option<String>,
}
