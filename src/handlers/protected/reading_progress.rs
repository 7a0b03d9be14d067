// handlers/protected/reading_progress.rs - /api/reading-progress handlers

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    Extension, Json,
};
use serde::Deserialize;

use super::parse_body;
use crate::database::models::{NewReadingProgress, ReadingProgress};
use crate::error::store_failure;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::state::AppState;
use crate::validation::{at_least, required, Validate, ValidationError};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingProgressQuery {
    /// Restrict to one plan; absent or empty means every plan
    pub plan_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateReadingProgressRequest {
    pub plan_id: String,
    pub day: i32,
    #[serde(default)]
    pub completed: bool,
}

impl Validate for UpdateReadingProgressRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        required("planId", &self.plan_id)?;
        at_least("day", self.day, 1)
    }
}

impl UpdateReadingProgressRequest {
    fn into_record(self, user_id: String) -> NewReadingProgress {
        NewReadingProgress {
            user_id,
            plan_id: self.plan_id,
            day: self.day,
            completed: self.completed,
        }
    }
}

/// GET /api/reading-progress?planId=
pub async fn list(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Query(query): Query<ReadingProgressQuery>,
) -> ApiResult<Vec<ReadingProgress>> {
    let plan_id = query.plan_id.as_deref().filter(|id| !id.is_empty());

    let progress = state
        .storage
        .user_reading_progress(&user.id, plan_id)
        .await
        .map_err(store_failure("Failed to fetch reading progress"))?;

    Ok(ApiResponse::success(progress))
}

/// POST /api/reading-progress - Upsert on (user, plan, day)
pub async fn update(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    body: Result<Json<UpdateReadingProgressRequest>, JsonRejection>,
) -> ApiResult<ReadingProgress> {
    const MESSAGE: &str = "Failed to update reading progress";

    let request = parse_body(body, MESSAGE)?;
    let progress = state
        .storage
        .upsert_reading_progress(request.into_record(user.id))
        .await
        .map_err(store_failure(MESSAGE))?;

    Ok(ApiResponse::success(progress))
}
