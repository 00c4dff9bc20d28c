//! Validation contracts for the two input payloads.
//!
//! The contracts are fixed:
//!
//! - **Candidate**: an object with optional `objective` (number or null) and optional
//!   `constraint` (number, null, or a non-empty array of numbers).
//! - **History**: an array of objects, each requiring `score` (number), with optional
//!   `objective` and `constraint` following the candidate rules.
//!
//! Additional properties are permitted everywhere. Validation runs over raw
//! [`serde_json::Value`]s so that failures can name the exact offending location.

use serde_json::{Map, Value};
use thiserror::Error;

pub const CANDIDATE: &str = "candidate";
pub const HISTORY: &str = "history";

const OBJECTIVE: &str = "objective";
const CONSTRAINT: &str = "constraint";
const SCORE: &str = "score";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{payload}: invalid JSON: {message}")]
    Json {
        payload: &'static str,
        message: String,
    },

    #[error("{path}: {message}")]
    Schema { path: String, message: String },
}

impl ValidationError {
    fn schema(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Schema {
            path: path.into(),
            message: message.into(),
        }
    }
}

pub fn parse_payload(payload: &'static str, text: &str) -> Result<Value, ValidationError> {
    serde_json::from_str(text).map_err(|e| ValidationError::Json {
        payload,
        message: e.to_string(),
    })
}

pub fn validate_candidate(value: &Value) -> Result<(), ValidationError> {
    let object = expect_object(CANDIDATE, value)?;
    validate_optional_fields(CANDIDATE, object)
}

pub fn validate_history(value: &Value) -> Result<(), ValidationError> {
    let entries = value
        .as_array()
        .ok_or_else(|| ValidationError::schema(HISTORY, "expected an array of scored solutions"))?;

    for (index, entry) in entries.iter().enumerate() {
        let path = format!("{HISTORY}[{index}]");
        let object = expect_object(&path, entry)?;

        match object.get(SCORE) {
            None => {
                return Err(ValidationError::schema(
                    path,
                    format!("missing required property '{SCORE}'"),
                ));
            }
            Some(score) if !score.is_number() => {
                return Err(ValidationError::schema(
                    format!("{path}.{SCORE}"),
                    "expected a number",
                ));
            }
            Some(_) => {}
        }

        validate_optional_fields(&path, object)?;
    }
    Ok(())
}

fn expect_object<'a>(path: &str, value: &'a Value) -> Result<&'a Map<String, Value>, ValidationError> {
    value
        .as_object()
        .ok_or_else(|| ValidationError::schema(path, "expected an object"))
}

fn validate_optional_fields(path: &str, object: &Map<String, Value>) -> Result<(), ValidationError> {
    if let Some(objective) = object.get(OBJECTIVE) {
        if !(objective.is_number() || objective.is_null()) {
            return Err(ValidationError::schema(
                format!("{path}.{OBJECTIVE}"),
                "expected a number or null",
            ));
        }
    }

    if let Some(constraint) = object.get(CONSTRAINT) {
        validate_constraint(&format!("{path}.{CONSTRAINT}"), constraint)?;
    }
    Ok(())
}

fn validate_constraint(path: &str, value: &Value) -> Result<(), ValidationError> {
    match value {
        Value::Null | Value::Number(_) => Ok(()),
        Value::Array(items) if items.is_empty() => Err(ValidationError::schema(
            path,
            "expected a non-empty array of numbers",
        )),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .find(|(_, item)| !item.is_number())
            .map_or(Ok(()), |(index, _)| {
                Err(ValidationError::schema(
                    format!("{path}[{index}]"),
                    "expected a number",
                ))
            }),
        _ => Err(ValidationError::schema(
            path,
            "expected a number, null, or a non-empty array of numbers",
        )),
    }
}
