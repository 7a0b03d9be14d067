// handlers/protected/highlights.rs - /api/highlights handlers

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Extension, Json,
};
use serde::Deserialize;

use super::parse_body;
use crate::database::models::{Highlight, HighlightColor, NewHighlight};
use crate::error::store_failure;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::state::AppState;
use crate::validation::{at_least, required, Validate, ValidationError};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateHighlightRequest {
    pub book_id: String,
    pub chapter: i32,
    pub verse: i32,
    #[serde(default)]
    pub color: HighlightColor,
}

impl Validate for CreateHighlightRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        required("bookId", &self.book_id)?;
        at_least("chapter", self.chapter, 1)?;
        at_least("verse", self.verse, 1)
    }
}

impl CreateHighlightRequest {
    fn into_record(self, user_id: String) -> NewHighlight {
        NewHighlight {
            user_id,
            book_id: self.book_id,
            chapter: self.chapter,
            verse: self.verse,
            color: self.color,
        }
    }
}

/// GET /api/highlights
pub async fn list(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<Vec<Highlight>> {
    let highlights = state
        .storage
        .user_highlights(&user.id)
        .await
        .map_err(store_failure("Failed to fetch highlights"))?;

    Ok(ApiResponse::success(highlights))
}

/// POST /api/highlights
pub async fn create(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    body: Result<Json<CreateHighlightRequest>, JsonRejection>,
) -> ApiResult<Highlight> {
    const MESSAGE: &str = "Failed to create highlight";

    let request = parse_body(body, MESSAGE)?;
    let highlight = state
        .storage
        .create_highlight(request.into_record(user.id))
        .await
        .map_err(store_failure(MESSAGE))?;

    Ok(ApiResponse::created(highlight))
}

/// DELETE /api/highlights/:id
pub async fn delete(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> ApiResult<()> {
    state
        .storage
        .delete_highlight(&id, &user.id)
        .await
        .map_err(store_failure("Failed to delete highlight"))?;

    Ok(ApiResponse::no_content())
}
