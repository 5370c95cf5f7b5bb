use serde::Serialize;
use serde_json::Value;
use axum::Json;
use axum::http::StatusCode;

pub const CREATED_MESSAGE: &str = "Successfully created page";

#[derive(Serialize)]
pub struct IntakeResponse {
    pub message: String,
    pub data: Value,
}

/// Wraps the sink's answer verbatim. The sink's own status is not inspected.
pub fn created(data: Value) -> (StatusCode, Json<IntakeResponse>) {
    (
        StatusCode::OK,
        Json(IntakeResponse {
            message: CREATED_MESSAGE.to_string(),
            data,
        }),
    )
}
