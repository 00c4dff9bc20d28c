//! # bestfit
//!
//! Feasibility-gated "best-so-far" scoring for one step of an optimization run.
//!
//! Given a freshly evaluated candidate (an objective plus optional constraint residuals)
//! and the ordered history of previously scored solutions, the library computes the
//! running minimum over all feasible objectives seen so far.
//!
//! ## Layout
//!
//! - **[`core`]: The Data.** Stateless solution models, the fixed JSON validation
//!   contracts (`schema`), and the feasibility predicate.
//!
//! - **[`engine`]: The Logic.** Scoring configuration (the worst-value sentinel), the
//!   error taxonomy, and the [`engine::scorer::Scorer`] itself.
//!
//! - **[`workflows`]: The Public API.** Entry points that take raw JSON payloads,
//!   validate them, and return a scored outcome or a typed error.

pub mod core;
pub mod engine;
pub mod workflows;
