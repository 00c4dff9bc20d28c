use crate::core::models::solution::{Candidate, ScoredSolution};
use crate::core::schema::{self, CANDIDATE, HISTORY};
use crate::engine::config::ScoringConfig;
use crate::engine::error::ScoreError;
use crate::engine::scorer::{ScoreOutcome, Scorer};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info, instrument};

/// Scores a candidate given both payloads as JSON text.
pub fn score_str(
    candidate: &str,
    history: &str,
    config: &ScoringConfig,
) -> Result<ScoreOutcome, ScoreError> {
    let candidate = schema::parse_payload(CANDIDATE, candidate)?;
    let history = schema::parse_payload(HISTORY, history)?;
    score_values(&candidate, &history, config)
}

/// Scores a candidate given both payloads as parsed JSON values.
///
/// Both payloads are checked against their contracts before any conversion, so a
/// malformed payload always surfaces as [`ScoreError::Validation`].
#[instrument(skip_all, name = "best_score_workflow")]
pub fn score_values(
    candidate: &Value,
    history: &Value,
    config: &ScoringConfig,
) -> Result<ScoreOutcome, ScoreError> {
    schema::validate_candidate(candidate)?;
    schema::validate_history(history)?;
    debug!("Both payloads conform to their contracts.");

    let candidate = Candidate::deserialize(candidate)
        .map_err(|e| ScoreError::Computation(format!("failed to read {CANDIDATE}: {e}")))?;
    let history = Vec::<ScoredSolution>::deserialize(history)
        .map_err(|e| ScoreError::Computation(format!("failed to read {HISTORY}: {e}")))?;

    let outcome = Scorer::new(config).score(&candidate, &history)?;
    info!(
        score = outcome.score,
        feasible = outcome.feasibility.is_feasible(),
        improved = outcome.improved(),
        history_len = history.len(),
        "Best score computed."
    );
    Ok(outcome)
}
