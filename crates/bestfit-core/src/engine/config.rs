use thiserror::Error;

/// Sentinel used when no worst value is configured.
pub const DEFAULT_WORST_VALUE: f64 = f64::MAX;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Worst value must be a finite number, got {0}")]
    NonFiniteWorstValue(f64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringConfig {
    /// Objective substituted for infeasible candidates.
    pub worst_value: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            worst_value: DEFAULT_WORST_VALUE,
        }
    }
}

#[derive(Default)]
pub struct ScoringConfigBuilder {
    worst_value: Option<f64>,
}

impl ScoringConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn worst_value(mut self, value: f64) -> Self {
        self.worst_value = Some(value);
        self
    }

    pub fn build(self) -> Result<ScoringConfig, ConfigError> {
        let worst_value = self.worst_value.unwrap_or(DEFAULT_WORST_VALUE);
        if !worst_value.is_finite() {
            return Err(ConfigError::NonFiniteWorstValue(worst_value));
        }
        Ok(ScoringConfig { worst_value })
    }
}
