use std::fmt;
use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;


pub const PROMPT: &str = "Enter scores separated by spaces or commas: ";

/// Process state the resolver is allowed to look at, captured explicitly so
/// tests never have to mutate the real environment.
#[derive(Debug, Clone)]
pub struct SourceConfig {
    /// Invocation arguments after the program name, in order.
    pub args: Vec<String>,
    /// Value of the `SCORES` environment variable, if set.
    pub env_scores: Option<String>,
    /// Location of the scores file, normally `scores.txt` in the cwd.
    pub scores_path: PathBuf,
}

impl SourceConfig {
    pub fn from_process(args: Vec<String>) -> Self {
        SourceConfig {
            args,
            env_scores: std::env::var("SCORES").ok(),
            scores_path: PathBuf::from("scores.txt"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Args,
    EnvVar,
    File,
    Prompt,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SourceKind::Args => "arguments",
            SourceKind::EnvVar => "SCORES environment variable",
            SourceKind::File => "scores.txt",
            SourceKind::Prompt => "interactive prompt",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone)]
pub struct ResolvedInput {
    pub kind: SourceKind,
    pub text: String,
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("end of input while reading scores from the interactive prompt")]
    EndOfInput,
}

type Provider = fn(&SourceConfig) -> Result<Option<String>, SourceError>;

/// Non-interactive providers in strict priority order. Each reports
/// `Ok(None)` when its source is unavailable; errors mean the source was
/// available but could not be read, and those are fatal.
const PROVIDERS: [(SourceKind, Provider); 3] = [
    (SourceKind::Args, from_args),
    (SourceKind::EnvVar, from_env),
    (SourceKind::File, from_file),
];

pub fn resolve_input<R: BufRead, W: Write>(
    config: &SourceConfig,
    stdin: &mut R,
    prompt_out: &mut W,
) -> Result<ResolvedInput, SourceError> {
    for (kind, provider) in PROVIDERS {
        if let Some(text) = provider(config)? {
            tracing::debug!("resolved score input from {kind}");
            return Ok(ResolvedInput { kind, text });
        }
    }
    let text = from_prompt(stdin, prompt_out)?;
    Ok(ResolvedInput {
        kind: SourceKind::Prompt,
        text,
    })
}

fn from_args(config: &SourceConfig) -> Result<Option<String>, SourceError> {
    if config.args.is_empty() {
        return Ok(None);
    }
    Ok(Some(config.args.join(" ")))
}

fn from_env(config: &SourceConfig) -> Result<Option<String>, SourceError> {
    match config.env_scores.as_deref() {
        Some(value) if !value.is_empty() => Ok(Some(value.to_string())),
        _ => Ok(None),
    }
}

fn from_file(config: &SourceConfig) -> Result<Option<String>, SourceError> {
    if !is_regular_file(&config.scores_path) {
        return Ok(None);
    }
    Ok(Some(fs::read_to_string(&config.scores_path)?))
}

fn is_regular_file(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.is_file()).unwrap_or(false)
}

/// Terminal fallback: prompt and block for one line. A zero-byte read means
/// the stream is closed, which is a fatal condition rather than "no scores".
fn from_prompt<R: BufRead, W: Write>(stdin: &mut R, out: &mut W) -> Result<String, SourceError> {
    write!(out, "{PROMPT}")?;
    out.flush()?;
    let mut line = String::new();
    let read = stdin.read_line(&mut line)?;
    if read == 0 {
        return Err(SourceError::EndOfInput);
    }
    Ok(line)
}
