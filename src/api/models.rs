use serde::Deserialize;
use serde_json::Value;

/// Body of `POST /process`. Fields are kept loose here so a missing or
/// wrong-typed one becomes a validation error instead of a rejection.
#[derive(Debug, Default, Deserialize)]
pub struct IntakeRequest {
    pub url: Option<Value>,
    pub category: Option<Value>,
}
