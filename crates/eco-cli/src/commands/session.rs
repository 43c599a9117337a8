use std::io::Write as _;

use anyhow::Context;
use eco_core::SessionLog;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::cli::root_commands::{DEFAULT_SUBJECT_A, DEFAULT_SUBJECT_B, SessionArgs};
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::{output, render_session_log};
use crate::progress::StageProgress;

#[derive(Debug, PartialEq, Eq)]
enum Answer {
    Subject(String),
    Quit,
}

/// Interpret one line of operator input. `None` is end of input.
fn parse_answer(line: Option<&str>, default: &str) -> Answer {
    let Some(line) = line else {
        return Answer::Quit;
    };
    match line.trim() {
        "" => Answer::Subject(default.to_string()),
        "q" | "quit" | "exit" => Answer::Quit,
        subject => Answer::Subject(subject.to_string()),
    }
}

async fn ask<R>(
    lines: &mut tokio::io::Lines<R>,
    label: &str,
    default: &str,
) -> anyhow::Result<Answer>
where
    R: tokio::io::AsyncBufRead + Unpin,
{
    eprint!("{label} [{default}]: ");
    std::io::stderr().flush().ok();
    let line = lines
        .next_line()
        .await
        .context("failed to read from stdin")?;
    Ok(parse_answer(line.as_deref(), default))
}

pub async fn handle(args: &SessionArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut log = SessionLog::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    if !flags.quiet {
        eprintln!("EcoLens session. Press enter to accept defaults, 'quit' to exit.");
    }

    loop {
        let Answer::Subject(subject_a) = ask(&mut lines, "Material A", DEFAULT_SUBJECT_A).await?
        else {
            break;
        };
        let Answer::Subject(subject_b) = ask(&mut lines, "Material B", DEFAULT_SUBJECT_B).await?
        else {
            break;
        };

        let request = ctx.request(subject_a, subject_b, args.api_key.as_deref());
        let mut stages = StageProgress::default();
        let comparison = ctx
            .pipeline
            .run_observed(&request, &mut log, |stage| stages.observe(stage))
            .await;

        output(&comparison, flags.format)?;
        if flags.format == OutputFormat::Markdown {
            println!("\n{}\n", render_session_log(&log));
        }
    }

    if flags.format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&log)?);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn blank_line_takes_default() {
        assert_eq!(
            parse_answer(Some("  "), "Cotton"),
            Answer::Subject("Cotton".into())
        );
    }

    #[test]
    fn input_is_trimmed() {
        assert_eq!(
            parse_answer(Some(" Recycled PET \n"), "Cotton"),
            Answer::Subject("Recycled PET".into())
        );
    }

    #[test]
    fn quit_words_and_eof_end_session() {
        for line in [Some("quit"), Some("exit"), Some("q"), None] {
            assert_eq!(parse_answer(line, "Cotton"), Answer::Quit);
        }
    }

    #[tokio::test]
    async fn ask_reads_successive_lines() {
        let input: &[u8] = b"Hemp\n\n";
        let mut lines = BufReader::new(input).lines();

        assert_eq!(
            ask(&mut lines, "Material A", "Bamboo Fiber").await.unwrap(),
            Answer::Subject("Hemp".into())
        );
        assert_eq!(
            ask(&mut lines, "Material B", "Cotton").await.unwrap(),
            Answer::Subject("Cotton".into())
        );
        assert_eq!(
            ask(&mut lines, "Material A", "Bamboo Fiber").await.unwrap(),
            Answer::Quit
        );
    }
}
