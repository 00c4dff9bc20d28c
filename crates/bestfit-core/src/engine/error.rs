use thiserror::Error;

use crate::core::schema::ValidationError;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScoreError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Computation error: {0}")]
    Computation(String),
}

impl ScoreError {
    pub fn is_validation(&self) -> bool {
        matches!(self, ScoreError::Validation(_))
    }
}
