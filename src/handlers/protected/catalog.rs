// handlers/protected/catalog.rs - Read-only reference data
//
// Books, verses, devotionals, reading plans, Q&A, multimedia, quiz
// questions and flashcards. Nothing here is user-scoped.

use axum::extract::{rejection::PathRejection, Path, Query, State};
use serde::Deserialize;

use crate::database::models::{
    BibleBook, BibleVerse, Devotional, Flashcard, MediaType, MultimediaContent, QaItem,
    QuizQuestion, ReadingPlan, ReadingPlanDay,
};
use crate::error::{store_failure, ApiError};
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

/// Translation served when the client does not ask for one
pub const DEFAULT_VERSION: &str = "NVI";

#[derive(Debug, Default, Deserialize)]
pub struct VersionQuery {
    pub version: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CategoryQuery {
    pub category: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct QuizQuery {
    pub category: Option<String>,
    pub difficulty: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct MultimediaQuery {
    #[serde(rename = "type")]
    pub media_type: Option<String>,
}

/// Empty query values behave like absent ones
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// GET /api/bible/books
pub async fn books(State(state): State<AppState>) -> ApiResult<Vec<BibleBook>> {
    let books = state
        .catalog
        .books()
        .await
        .map_err(store_failure("Failed to fetch books"))?;

    Ok(ApiResponse::success(books))
}

/// GET /api/bible/books/:bookId/chapters/:chapter?version=
pub async fn chapter(
    State(state): State<AppState>,
    path: Result<Path<(String, i32)>, PathRejection>,
    Query(query): Query<VersionQuery>,
) -> ApiResult<Vec<BibleVerse>> {
    let Path((book_id, chapter)) = path.map_err(|rejection| {
        tracing::warn!(error = %rejection.body_text(), "Invalid chapter reference");
        ApiError::validation_error("Invalid chapter reference")
    })?;
    let version = non_empty(&query.version).unwrap_or(DEFAULT_VERSION);

    let verses = state
        .catalog
        .chapter_verses(&book_id, chapter, version)
        .await
        .map_err(store_failure("Failed to fetch verses"))?;

    Ok(ApiResponse::success(verses))
}

/// GET /api/devotionals
pub async fn devotionals(State(state): State<AppState>) -> ApiResult<Vec<Devotional>> {
    let devotionals = state
        .catalog
        .devotionals()
        .await
        .map_err(store_failure("Failed to fetch devotionals"))?;

    Ok(ApiResponse::success(devotionals))
}

/// GET /api/devotionals/:id
pub async fn devotional(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Devotional> {
    state
        .catalog
        .devotional(&id)
        .await
        .map_err(store_failure("Failed to fetch devotional"))?
        .map(ApiResponse::success)
        .ok_or_else(|| ApiError::not_found("Devotional not found"))
}

/// GET /api/reading-plans
pub async fn reading_plans(State(state): State<AppState>) -> ApiResult<Vec<ReadingPlan>> {
    let plans = state
        .catalog
        .reading_plans()
        .await
        .map_err(store_failure("Failed to fetch reading plans"))?;

    Ok(ApiResponse::success(plans))
}

/// GET /api/reading-plans/:id/days
pub async fn reading_plan_days(
    State(state): State<AppState>,
    Path(plan_id): Path<String>,
) -> ApiResult<Vec<ReadingPlanDay>> {
    let days = state
        .catalog
        .reading_plan_days(&plan_id)
        .await
        .map_err(store_failure("Failed to fetch reading plan days"))?;

    Ok(ApiResponse::success(days))
}

/// GET /api/qa?category=
pub async fn qa_items(
    State(state): State<AppState>,
    Query(query): Query<CategoryQuery>,
) -> ApiResult<Vec<QaItem>> {
    let items = state
        .catalog
        .qa_items(non_empty(&query.category))
        .await
        .map_err(store_failure("Failed to fetch Q&A items"))?;

    Ok(ApiResponse::success(items))
}

/// GET /api/multimedia?type=video|podcast|music
pub async fn multimedia(
    State(state): State<AppState>,
    Query(query): Query<MultimediaQuery>,
) -> ApiResult<Vec<MultimediaContent>> {
    let media_type = non_empty(&query.media_type)
        .map(str::parse::<MediaType>)
        .transpose()
        .map_err(|e| {
            tracing::warn!(error = %e, "Rejected multimedia filter");
            ApiError::validation_error("Invalid multimedia type")
        })?;

    let items = state
        .catalog
        .multimedia(media_type)
        .await
        .map_err(store_failure("Failed to fetch multimedia"))?;

    Ok(ApiResponse::success(items))
}

/// GET /api/quiz/questions?category=&difficulty=
pub async fn quiz_questions(
    State(state): State<AppState>,
    Query(query): Query<QuizQuery>,
) -> ApiResult<Vec<QuizQuestion>> {
    let questions = state
        .catalog
        .quiz_questions(non_empty(&query.category), non_empty(&query.difficulty))
        .await
        .map_err(store_failure("Failed to fetch quiz questions"))?;

    Ok(ApiResponse::success(questions))
}

/// GET /api/flashcards?category=
pub async fn flashcards(
    State(state): State<AppState>,
    Query(query): Query<CategoryQuery>,
) -> ApiResult<Vec<Flashcard>> {
    let cards = state
        .catalog
        .flashcards(non_empty(&query.category))
        .await
        .map_err(store_failure("Failed to fetch flashcards"))?;

    Ok(ApiResponse::success(cards))
}
