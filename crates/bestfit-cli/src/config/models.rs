use bestfit::engine::config::ScoringConfig;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OutputConfig {
    pub pretty: bool,
    pub strict: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppConfig {
    pub scoring: ScoringConfig,
    pub output: OutputConfig,
}
