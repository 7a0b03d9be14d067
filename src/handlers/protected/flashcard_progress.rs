// handlers/protected/flashcard_progress.rs - /api/flashcard-progress handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    Extension, Json,
};
use serde::Deserialize;

use super::parse_body;
use crate::database::models::{FlashcardProgress, NewFlashcardProgress};
use crate::error::store_failure;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::state::AppState;
use crate::validation::{required, Validate, ValidationError};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateFlashcardProgressRequest {
    pub flashcard_id: String,
    #[serde(default)]
    pub learned: bool,
}

impl Validate for UpdateFlashcardProgressRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        required("flashcardId", &self.flashcard_id)
    }
}

impl UpdateFlashcardProgressRequest {
    fn into_record(self, user_id: String) -> NewFlashcardProgress {
        NewFlashcardProgress {
            user_id,
            flashcard_id: self.flashcard_id,
            learned: self.learned,
        }
    }
}

/// GET /api/flashcard-progress
pub async fn list(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<Vec<FlashcardProgress>> {
    let progress = state
        .storage
        .user_flashcard_progress(&user.id)
        .await
        .map_err(store_failure("Failed to fetch flashcard progress"))?;

    Ok(ApiResponse::success(progress))
}

/// POST /api/flashcard-progress - Upsert on (user, flashcard)
pub async fn update(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    body: Result<Json<UpdateFlashcardProgressRequest>, JsonRejection>,
) -> ApiResult<FlashcardProgress> {
    const MESSAGE: &str = "Failed to update flashcard progress";

    let request = parse_body(body, MESSAGE)?;
    let progress = state
        .storage
        .upsert_flashcard_progress(request.into_record(user.id))
        .await
        .map_err(store_failure(MESSAGE))?;

    Ok(ApiResponse::success(progress))
}
