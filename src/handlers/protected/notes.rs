// handlers/protected/notes.rs - /api/notes handlers

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Extension, Json,
};
use serde::Deserialize;

use super::parse_body;
use crate::database::models::{NewNote, Note};
use crate::error::store_failure;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::state::AppState;
use crate::validation::{at_least, required, Validate, ValidationError};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateNoteRequest {
    pub book_id: String,
    pub chapter: i32,
    pub verse: i32,
    pub content: String,
}

impl Validate for CreateNoteRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        required("bookId", &self.book_id)?;
        at_least("chapter", self.chapter, 1)?;
        at_least("verse", self.verse, 1)?;
        required("content", &self.content)
    }
}

impl CreateNoteRequest {
    fn into_record(self, user_id: String) -> NewNote {
        NewNote {
            user_id,
            book_id: self.book_id,
            chapter: self.chapter,
            verse: self.verse,
            content: self.content,
        }
    }
}

/// GET /api/notes
pub async fn list(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<Vec<Note>> {
    let notes = state
        .storage
        .user_notes(&user.id)
        .await
        .map_err(store_failure("Failed to fetch notes"))?;

    Ok(ApiResponse::success(notes))
}

/// POST /api/notes
pub async fn create(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    body: Result<Json<CreateNoteRequest>, JsonRejection>,
) -> ApiResult<Note> {
    const MESSAGE: &str = "Failed to create note";

    let request = parse_body(body, MESSAGE)?;
    let note = state
        .storage
        .create_note(request.into_record(user.id))
        .await
        .map_err(store_failure(MESSAGE))?;

    Ok(ApiResponse::created(note))
}

/// DELETE /api/notes/:id - 204 whether or not the note existed
pub async fn delete(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> ApiResult<()> {
    state
        .storage
        .delete_note(&id, &user.id)
        .await
        .map_err(store_failure("Failed to delete note"))?;

    Ok(ApiResponse::no_content())
}
