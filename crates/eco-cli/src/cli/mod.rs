use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `ecolens` binary.
#[derive(Debug, Parser)]
#[command(
    name = "ecolens",
    version,
    about = "EcoLens - comparative life cycle assessment of two materials"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: markdown, json
    #[arg(short, long, global = true, default_value = "markdown")]
    pub format: OutputFormat,

    /// Quiet mode (suppress progress and non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub const fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
        }
    }
}
