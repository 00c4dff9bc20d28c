mod cli;
mod commands;
mod config;
mod error;
mod input;
mod logging;
mod output;

use crate::cli::Cli;
use crate::config::{AppConfig, OutputConfig};
use crate::error::{CliError, Result};
use crate::input::InputSource;
use bestfit::engine::scorer::ScoreOutcome;
use clap::Parser;
use std::process::ExitCode;
use tracing::{debug, error, info};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let (output_config, result) = run_app(&cli);

    let report = output::report_for(&result);
    if let Err(e) = output::write_report(&report, output_config.pretty, std::io::stdout().lock()) {
        eprintln!("Error: failed to write result: {}", e);
        return ExitCode::FAILURE;
    }

    match &result {
        Ok(outcome) => {
            info!("Command completed successfully with score {}.", outcome.score);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Command failed: {}", e);
            if output_config.strict {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
    }
}

/// Runs one invocation. Output settings fall back to the raw CLI flags when the
/// configuration itself cannot be resolved, so even that failure is reported as JSON.
fn run_app(cli: &Cli) -> (OutputConfig, Result<ScoreOutcome>) {
    let fallback_output = OutputConfig {
        pretty: cli.pretty,
        strict: cli.strict,
    };

    let app_config = match prepare(cli) {
        Ok(app_config) => app_config,
        Err(e) => return (fallback_output, Err(e)),
    };

    (app_config.output, score(cli, &app_config))
}

fn prepare(cli: &Cli) -> Result<AppConfig> {
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.as_deref())?;
    install_panic_hook()?;

    info!(
        "best-fitness v{} starting up.",
        env!("CARGO_PKG_VERSION")
    );
    debug!("Full CLI arguments parsed: {:?}", cli);

    config::build_config(cli, |key| std::env::var(key).ok())
}

fn score(cli: &Cli, app_config: &AppConfig) -> Result<ScoreOutcome> {
    let source = InputSource::from_cli(cli)?;
    let payloads = source.read(std::io::stdin().lock())?;
    commands::score::run(&payloads, &app_config.scoring)
}

fn install_panic_hook() -> Result<()> {
    let (panic_hook, eyre_hook) = color_eyre::config::HookBuilder::default().into_hooks();
    eyre_hook.install().map_err(|e| CliError::Other(e.into()))?;
    std::panic::set_hook(Box::new(move |pi| {
        error!("{}", panic_hook.panic_report(pi));
    }));
    Ok(())
}
