//! Solution models, payload validation contracts, and feasibility rules.
//!
//! Nothing in this module keeps state between calls; every function is a pure
//! transform over its inputs.

pub mod feasibility;
pub mod models;
pub mod schema;
