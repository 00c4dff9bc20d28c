//! # Engine Module
//!
//! The scoring logic: configuration of the worst-value sentinel, the error taxonomy
//! shared by every entry point, and the [`scorer::Scorer`] that folds a candidate into
//! the running best score.
//!
//! - **Configuration** ([`config`]) - The worst value substituted for infeasible candidates
//! - **Error Handling** ([`error`]) - Validation versus computation failures
//! - **Scoring** ([`scorer`]) - The feasibility-gated minimum over candidate and history

pub mod config;
pub mod error;
pub mod scorer;
