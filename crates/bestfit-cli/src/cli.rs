use clap::Parser;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

const AFTER_HELP: &str = "\
Input channels:
  best-fitness '<CANDIDATE>' '<HISTORY>'      payloads as arguments
  best-fitness --files <CANDIDATE> <HISTORY>  payloads read from files
  best-fitness                                two lines read from stdin

The worst value can also be set through BEST_FITNESS_WORST_VALUE.";

#[derive(Parser, Debug, Default)]
#[command(
    version,
    about = "best-fitness - Computes the feasibility-gated best-so-far score of a candidate solution and prints it as JSON.",
    help_template = HELP_TEMPLATE,
    after_help = AFTER_HELP,
)]
pub struct Cli {
    /// Candidate solution as JSON, e.g. '{"objective": 5, "constraint": [-1]}'.
    /// A file path when --files is given.
    #[arg(value_name = "CANDIDATE")]
    pub candidate: Option<String>,

    /// Scored history as a JSON array, most recent (best) entry last.
    /// A file path when --files is given.
    #[arg(value_name = "HISTORY")]
    pub history: Option<String>,

    /// Treat CANDIDATE and HISTORY as paths to JSON files.
    #[arg(short, long, requires = "history")]
    pub files: bool,

    // --- Configuration ---
    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Objective substituted for infeasible candidates (default: the maximum finite float).
    #[arg(short, long, value_name = "FLOAT", allow_negative_numbers = true)]
    pub worst_value: Option<f64>,

    /// Set a specific configuration value, overriding the config file and environment.
    /// Can be used multiple times. Example: -S scoring.worst-value=1e308
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,

    // --- Output ---
    /// Exit with a non-zero status when the result carries an error.
    #[arg(long)]
    pub strict: bool,

    /// Pretty-print the JSON result.
    #[arg(long)]
    pub pretty: bool,

    // --- Logging ---
    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}
