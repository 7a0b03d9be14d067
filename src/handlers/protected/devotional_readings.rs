// handlers/protected/devotional_readings.rs - /api/devotional-readings handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    Extension, Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use super::parse_body;
use crate::database::models::DevotionalReading;
use crate::error::store_failure;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::state::AppState;
use crate::validation::{required, Validate, ValidationError};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MarkReadRequest {
    pub devotional_id: String,
}

impl Validate for MarkReadRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        required("devotionalId", &self.devotional_id)
    }
}

/// GET /api/devotional-readings
pub async fn list(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<Vec<DevotionalReading>> {
    let readings = state
        .storage
        .user_devotional_readings(&user.id)
        .await
        .map_err(store_failure("Failed to fetch devotional readings"))?;

    Ok(ApiResponse::success(readings))
}

/// POST /api/devotional-readings - Appends a reading; repeats are kept
pub async fn mark_read(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    body: Result<Json<MarkReadRequest>, JsonRejection>,
) -> ApiResult<Value> {
    let request = parse_body(body, "devotionalId is required")?;

    state
        .storage
        .mark_devotional_as_read(&user.id, &request.devotional_id)
        .await
        .map_err(store_failure("Failed to mark devotional as read"))?;

    Ok(ApiResponse::created(json!({ "success": true })))
}
