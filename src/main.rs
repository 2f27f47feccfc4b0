mod parse;
mod report;
mod source;
mod trace;

use clap::Parser;
use thiserror::Error;

use crate::report::json::render_report_json;
use crate::report::text::render_report_text;
use crate::source::{SourceConfig, SourceError, resolve_input};

#[derive(Debug, Parser)]
#[command(
    name = "scorestat",
    version,
    about = "Descriptive statistics over a list of numeric scores"
)]
struct Cli {
    /// Scores as free-form text; commas and spaces both separate values.
    /// When no arguments are given, input falls back to the SCORES
    /// environment variable, then ./scores.txt, then an interactive prompt.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    scores: Vec<String>,
}

#[derive(Debug, Error)]
enum AppError {
    #[error("no valid scores provided")]
    NoValidScores,
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error("failed to encode JSON report: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() {
    trace::init();
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => {}
        Err(AppError::NoValidScores) => {
            println!("No valid scores provided.");
            std::process::exit(1);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let config = SourceConfig::from_process(cli.scores);
    let stdin = std::io::stdin();
    let resolved = resolve_input(&config, &mut stdin.lock(), &mut std::io::stdout())?;

    let scores = parse::parse_scores(&resolved.text);
    let report = report::compute(&scores).ok_or(AppError::NoValidScores)?;

    let format = output_format(std::env::var("SCORES_FORMAT").ok().as_deref());
    let rendered = match format {
        OutputFormat::Text => render_report_text(&report),
        OutputFormat::Json => render_report_json(&report, resolved.kind)?,
    };
    print!("{rendered}");

    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

fn output_format(env_value: Option<&str>) -> OutputFormat {
    match env_value {
        None | Some("") | Some("text") => OutputFormat::Text,
        Some("json") => OutputFormat::Json,
        Some(other) => {
            tracing::warn!("unknown SCORES_FORMAT value {other:?}; using text");
            OutputFormat::Text
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_collects_all_arguments_verbatim() {
        let cli = Cli::try_parse_from(["scorestat", "1, 2, 3", "4"]).unwrap();
        assert_eq!(cli.scores, vec!["1, 2, 3".to_string(), "4".to_string()]);
    }

    #[test]
    fn test_cli_accepts_negative_scores() {
        let cli = Cli::try_parse_from(["scorestat", "-1.5", "2"]).unwrap();
        assert_eq!(cli.scores, vec!["-1.5".to_string(), "2".to_string()]);
    }

    #[test]
    fn test_cli_accepts_no_arguments() {
        let cli = Cli::try_parse_from(["scorestat"]).unwrap();
        assert!(cli.scores.is_empty());
    }

    #[test]
    fn test_output_format_default_text() {
        assert_eq!(output_format(None), OutputFormat::Text);
        assert_eq!(output_format(Some("")), OutputFormat::Text);
        assert_eq!(output_format(Some("text")), OutputFormat::Text);
    }

    #[test]
    fn test_output_format_json() {
        assert_eq!(output_format(Some("json")), OutputFormat::Json);
    }

    #[test]
    fn test_output_format_unknown_falls_back_to_text() {
        assert_eq!(output_format(Some("yaml")), OutputFormat::Text);
    }

    #[test]
    fn test_args_to_report_end_to_end() {
        let config = SourceConfig {
            args: vec!["1, 2, 3".to_string(), "4".to_string()],
            env_scores: None,
            scores_path: "missing.txt".into(),
        };
        let mut stdin = std::io::Cursor::new(Vec::new());
        let mut prompt_out = Vec::new();
        let resolved = resolve_input(&config, &mut stdin, &mut prompt_out).unwrap();
        assert_eq!(resolved.text, "1, 2, 3 4");

        let scores = parse::parse_scores(&resolved.text);
        assert_eq!(scores, vec![1.0, 2.0, 3.0, 4.0]);

        let report = report::compute(&scores).unwrap();
        assert_eq!(report.count, 4);
        assert_eq!(report.median, 2.5);
        assert_eq!(render_report_text(&report).lines().count(), 7);
    }
}
