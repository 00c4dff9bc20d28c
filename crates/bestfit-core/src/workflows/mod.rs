//! # Workflows Module
//!
//! End-to-end entry points that take the two raw JSON payloads of an invocation and
//! produce a scored outcome.
//!
//! - **Best-so-far Workflow** ([`best`]) - Parse, validate against the payload contracts,
//!   assess feasibility, and fold the candidate into the running best score.

pub mod best;
