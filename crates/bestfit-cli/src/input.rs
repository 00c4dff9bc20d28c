use crate::cli::Cli;
use crate::error::{CliError, Result};
use std::io::BufRead;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Where the two JSON payloads of an invocation come from.
#[derive(Debug, Clone, PartialEq)]
pub enum InputSource {
    Args { candidate: String, history: String },
    Files { candidate: PathBuf, history: PathBuf },
    Stdin,
}

/// The raw candidate and history documents.
#[derive(Debug, Clone, PartialEq)]
pub struct Payloads {
    pub candidate: String,
    pub history: String,
}

impl InputSource {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        match (&cli.candidate, &cli.history) {
            (None, None) => Ok(InputSource::Stdin),
            (Some(candidate), Some(history)) if cli.files => Ok(InputSource::Files {
                candidate: PathBuf::from(candidate),
                history: PathBuf::from(history),
            }),
            (Some(candidate), Some(history)) => Ok(InputSource::Args {
                candidate: candidate.clone(),
                history: history.clone(),
            }),
            _ => Err(CliError::Input(
                "expected both CANDIDATE and HISTORY, or neither to read them from stdin"
                    .to_string(),
            )),
        }
    }

    pub fn read<R: BufRead>(&self, stdin: R) -> Result<Payloads> {
        match self {
            InputSource::Args { candidate, history } => {
                debug!("Reading payloads from command-line arguments.");
                Ok(Payloads {
                    candidate: candidate.clone(),
                    history: history.clone(),
                })
            }
            InputSource::Files { candidate, history } => {
                debug!("Reading payloads from {:?} and {:?}.", candidate, history);
                Ok(Payloads {
                    candidate: read_file(candidate)?,
                    history: read_file(history)?,
                })
            }
            InputSource::Stdin => {
                debug!("Reading payloads from stdin.");
                read_lines(stdin)
            }
        }
    }
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .map_err(|e| CliError::Input(format!("cannot read '{}': {}", path.display(), e)))
}

// One payload per line: candidate first, then history.
fn read_lines<R: BufRead>(stdin: R) -> Result<Payloads> {
    let mut lines = stdin.lines();
    let mut next_line = |name: &str| -> Result<String> {
        match lines.next() {
            Some(line) => Ok(line?),
            None => Err(CliError::Input(format!(
                "expected two lines on stdin (candidate, then history); the {} line is missing",
                name
            ))),
        }
    };

    let candidate = next_line("candidate")?;
    let history = next_line("history")?;
    Ok(Payloads { candidate, history })
}
