use super::config::ScoringConfig;
use super::error::ScoreError;
use crate::core::feasibility::{self, Feasibility};
use crate::core::models::solution::{Candidate, ScoredSolution};
use tracing::trace;

/// Result of folding one candidate into the history.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreOutcome {
    /// The running best score, `min(effective_objective, previous_best)`.
    pub score: f64,
    /// The candidate's objective after the feasibility gate.
    pub effective_objective: f64,
    /// The best score recorded by the last history entry, if any.
    pub previous_best: Option<f64>,
    pub feasibility: Feasibility,
}

impl ScoreOutcome {
    /// Whether the candidate strictly beat the previous best.
    pub fn improved(&self) -> bool {
        self.previous_best
            .is_none_or(|previous| self.effective_objective < previous)
    }
}

pub struct Scorer<'a> {
    config: &'a ScoringConfig,
}

impl<'a> Scorer<'a> {
    pub fn new(config: &'a ScoringConfig) -> Self {
        Self { config }
    }

    /// Computes the best score seen so far.
    ///
    /// The last history entry is trusted to hold the running minimum; earlier entries
    /// are provenance only and are not inspected.
    pub fn score(
        &self,
        candidate: &Candidate,
        history: &[ScoredSolution],
    ) -> Result<ScoreOutcome, ScoreError> {
        let feasibility = feasibility::assess(candidate);
        let effective_objective = feasibility::effective_objective(candidate, self.config.worst_value);
        trace!(?feasibility, effective_objective, "Candidate assessed.");

        let previous_best = match history.last() {
            None => None,
            Some(entry) if !entry.score.is_finite() => {
                return Err(ScoreError::Computation(format!(
                    "history[{}].score is not a finite number ({})",
                    history.len() - 1,
                    entry.score
                )));
            }
            Some(entry) => Some(entry.score),
        };

        let score = previous_best.map_or(effective_objective, |best| effective_objective.min(best));

        Ok(ScoreOutcome {
            score,
            effective_objective,
            previous_best,
            feasibility,
        })
    }
}
