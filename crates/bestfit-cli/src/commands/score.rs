use crate::error::{CliError, Result};
use crate::input::Payloads;
use bestfit::engine::config::ScoringConfig;
use bestfit::engine::error::ScoreError;
use bestfit::engine::scorer::ScoreOutcome;
use bestfit::workflows;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use tracing::info;

/// Scores the payloads, turning a panic inside the workflow into a computation error.
pub fn run(payloads: &Payloads, config: &ScoringConfig) -> Result<ScoreOutcome> {
    info!("Invoking the best-score workflow...");
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        workflows::best::score_str(&payloads.candidate, &payloads.history, config)
    }));

    match result {
        Ok(outcome) => Ok(outcome?),
        Err(payload) => Err(CliError::Score(ScoreError::Computation(panic_message(
            payload.as_ref(),
        )))),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "scoring panicked".to_string()
    }
}
