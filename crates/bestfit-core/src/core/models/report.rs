use serde::{Serialize, Serializer};

/// Largest magnitude below which every integral `f64` is exactly representable.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// The JSON document emitted for one invocation.
///
/// `{"score": <number>}` on success, `{"score": null, "error": "<message>"}` on failure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreReport {
    #[serde(serialize_with = "serialize_score")]
    pub score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ScoreReport {
    pub fn success(score: f64) -> Self {
        Self {
            score: Some(score),
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            score: None,
            error: Some(message.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

// Integral scores keep the spelling they had in the payload (`5`, not `5.0`).
fn serialize_score<S>(score: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match score {
        Some(value) if value.fract() == 0.0 && value.abs() < MAX_EXACT_INTEGER => {
            serializer.serialize_i64(*value as i64)
        }
        Some(value) => serializer.serialize_f64(*value),
        None => serializer.serialize_none(),
    }
}
