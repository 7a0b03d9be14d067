use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Completion state of one plan day; unique per (user, plan, day)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ReadingProgress {
    pub id: String,
    pub user_id: String,
    pub plan_id: String,
    pub day: i32,
    pub completed: bool,
    pub completed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct NewReadingProgress {
    pub user_id: String,
    pub plan_id: String,
    pub day: i32,
    pub completed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct QuizAttempt {
    pub id: String,
    pub user_id: String,
    pub score: i32,
    pub total_questions: i32,
    pub completed_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewQuizAttempt {
    pub user_id: String,
    pub score: i32,
    pub total_questions: i32,
}

/// Learned state of one flashcard; unique per (user, flashcard)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct FlashcardProgress {
    pub id: String,
    pub user_id: String,
    pub flashcard_id: String,
    pub learned: bool,
    pub last_reviewed: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewFlashcardProgress {
    pub user_id: String,
    pub flashcard_id: String,
    pub learned: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct DevotionalReading {
    pub id: String,
    pub user_id: String,
    pub devotional_id: String,
    pub read_at: DateTime<Utc>,
}
