use axum::{
    routing::{get, post},
    Router,
    extract::{rejection::JsonRejection, Json, State},
    http::StatusCode,
};
use serde_json::{json, Value};
use tower_http::cors::{CorsLayer, Any};
use tower_http::trace::TraceLayer;

use crate::error::{AppError, Result};
use crate::api::models::IntakeRequest;
use crate::api::response::{self, IntakeResponse};
use crate::intake::{process_intake, MISSING_FIELDS};
use crate::AppState;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/process", post(process_handler))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(app_state)
}

async fn process_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<IntakeRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<IntakeResponse>)> {
    let Json(req) = payload.map_err(|rejection| {
        tracing::debug!(%rejection, "rejecting unreadable request body");
        AppError::Validation(MISSING_FIELDS.to_string())
    })?;
    let start_time = std::time::Instant::now();

    let result = process_intake(&state, &req).await;
    tracing::debug!(elapsed = ?start_time.elapsed(), ok = result.is_ok(), "processed intake request");

    result.map(response::created)
}

async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
