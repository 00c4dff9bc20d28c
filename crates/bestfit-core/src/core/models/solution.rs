use serde::{Deserialize, Serialize};

/// Constraint residuals attached to a solution.
///
/// A payload may carry no constraint at all, a single residual, or a list of them.
/// All three shapes are normalized through [`Constraint::residuals`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Constraint {
    #[default]
    None,
    Scalar(f64),
    Vector(Vec<f64>),
}

impl Constraint {
    pub fn residuals(&self) -> &[f64] {
        match self {
            Constraint::None => &[],
            Constraint::Scalar(value) => std::slice::from_ref(value),
            Constraint::Vector(values) => values,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Constraint::None)
    }
}

/// The solution being scored in the current invocation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub objective: Option<f64>,
    #[serde(default, skip_serializing_if = "Constraint::is_none")]
    pub constraint: Constraint,
}

impl Candidate {
    pub fn new(objective: f64) -> Self {
        Self {
            objective: Some(objective),
            constraint: Constraint::None,
        }
    }

    pub fn with_constraint(mut self, constraint: Constraint) -> Self {
        self.constraint = constraint;
        self
    }
}

/// One entry of the scoring history.
///
/// `score` is authoritative; `objective` and `constraint` are carried for provenance only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredSolution {
    #[serde(default)]
    pub objective: Option<f64>,
    pub score: f64,
    #[serde(default, skip_serializing_if = "Constraint::is_none")]
    pub constraint: Constraint,
}

impl ScoredSolution {
    pub fn with_score(score: f64) -> Self {
        Self {
            objective: None,
            score,
            constraint: Constraint::None,
        }
    }
}
