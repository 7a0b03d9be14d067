// handlers/protected/quiz_attempts.rs - /api/quiz-attempts handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    Extension, Json,
};
use serde::Deserialize;

use super::parse_body;
use crate::database::models::{NewQuizAttempt, QuizAttempt};
use crate::error::store_failure;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::state::AppState;
use crate::validation::{at_least, Validate, ValidationError};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateQuizAttemptRequest {
    pub score: i32,
    pub total_questions: i32,
}

impl Validate for CreateQuizAttemptRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        at_least("score", self.score, 0)?;
        at_least("totalQuestions", self.total_questions, 1)?;
        if self.score > self.total_questions {
            return Err(ValidationError::ScoreExceedsTotal);
        }
        Ok(())
    }
}

impl CreateQuizAttemptRequest {
    fn into_record(self, user_id: String) -> NewQuizAttempt {
        NewQuizAttempt {
            user_id,
            score: self.score,
            total_questions: self.total_questions,
        }
    }
}

/// GET /api/quiz-attempts
pub async fn list(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<Vec<QuizAttempt>> {
    let attempts = state
        .storage
        .user_quiz_attempts(&user.id)
        .await
        .map_err(store_failure("Failed to fetch quiz attempts"))?;

    Ok(ApiResponse::success(attempts))
}

/// POST /api/quiz-attempts - `completedAt` is assigned by the store
pub async fn create(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    body: Result<Json<CreateQuizAttemptRequest>, JsonRejection>,
) -> ApiResult<QuizAttempt> {
    const MESSAGE: &str = "Failed to create quiz attempt";

    let request = parse_body(body, MESSAGE)?;
    let attempt = state
        .storage
        .create_quiz_attempt(request.into_record(user.id))
        .await
        .map_err(store_failure(MESSAGE))?;

    Ok(ApiResponse::created(attempt))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attempt(score: i32, total_questions: i32) -> CreateQuizAttemptRequest {
        CreateQuizAttemptRequest { score, total_questions }
    }

    #[test]
    fn score_must_fit_total() {
        assert!(attempt(4, 5).validate().is_ok());
        assert!(attempt(0, 5).validate().is_ok());
        assert_eq!(attempt(6, 5).validate(), Err(ValidationError::ScoreExceedsTotal));
        assert!(attempt(-1, 5).validate().is_err());
        assert!(attempt(0, 0).validate().is_err());
    }
}
