//! Layered configuration for the CLI.
//!
//! Values are resolved from, highest precedence first: command-line flags, `--set`
//! overrides, `BEST_FITNESS_*` environment variables, the TOML config file, and
//! built-in defaults.

mod builder;
mod defaults;
mod file;
mod models;

pub use builder::build_config;
pub use models::{AppConfig, OutputConfig};
