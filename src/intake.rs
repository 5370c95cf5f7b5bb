use chrono::Utc;
use serde_json::Value;
use tracing::Instrument;

use crate::AppState;
use crate::api::models::IntakeRequest;
use crate::category::{Category, UnknownCategory};
use crate::error::{AppError, Result};
use crate::extract::parse_reply;
use crate::prompt::build_prompt;
use crate::record::map_record;

pub const MISSING_FIELDS: &str = "Missing url or category";
pub const UNSUPPORTED_CATEGORY: &str = "Unsupported category";
pub const INVALID_CATEGORY: &str = "Invalid category";

/// A request that passed validation and knows where its record goes.
#[derive(Debug)]
struct Intake<'a> {
    url: &'a str,
    category: Category,
    database_id: &'a str,
}

/// A field counts as present only when it is a non-blank string.
fn non_empty(field: &Option<Value>) -> Option<&str> {
    field
        .as_ref()
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
}

fn validate<'a>(state: &'a AppState, req: &'a IntakeRequest) -> Result<Intake<'a>> {
    let (url, category) = match (non_empty(&req.url), non_empty(&req.category)) {
        (Some(url), Some(category)) => (url, category),
        _ => return Err(AppError::Validation(MISSING_FIELDS.to_string())),
    };

    let category: Category = category
        .parse()
        .map_err(|UnknownCategory(name)| {
            tracing::debug!(category = %name, "rejecting unsupported category");
            AppError::Validation(UNSUPPORTED_CATEGORY.to_string())
        })?;

    let database_id = state
        .config
        .database_ids
        .get(category)
        .ok_or_else(|| AppError::Validation(INVALID_CATEGORY.to_string()))?;

    Ok(Intake { url, category, database_id })
}

/// Runs one request through its category pipeline and returns the sink's
/// raw response. Nothing is written unless every step before it succeeded.
pub async fn process_intake(state: &AppState, req: &IntakeRequest) -> Result<Value> {
    let intake = validate(state, req)?;
    let span = tracing::info_span!("intake", category = %intake.category, url = intake.url);

    async move {
        let prompt = build_prompt(intake.category, intake.url);
        tracing::debug!(chars = prompt.user.len(), "built prompt");

        let reply = state.completion.complete(&prompt).await?;
        tracing::debug!(chars = reply.len(), "received completion");

        let fields = parse_reply(intake.category, &reply)?;
        let record = map_record(fields, intake.url, Utc::now());

        let response = state
            .sink
            .create_record(intake.database_id, &record)
            .await?;
        tracing::info!("page created");

        Ok(response)
    }
    .instrument(span)
    .await
}
