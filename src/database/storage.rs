use async_trait::async_trait;

use super::manager::DatabaseError;
use super::models::{
    DevotionalReading, Favorite, FlashcardProgress, Highlight, NewFavorite, NewFlashcardProgress,
    NewHighlight, NewNote, NewQuizAttempt, NewReadingProgress, Note, QuizAttempt,
    ReadingProgress, UpsertUser, User,
};

/// Access layer for user-owned data.
///
/// Every method is scoped by a caller-supplied user id; callers stamp the id
/// of the authenticated user onto new records. Owner-scoped deletes match
/// both the row id and the user id and are silent no-ops when nothing
/// matches. Lists with a creation timestamp come back newest first.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Round trip to the store, used by the health endpoint
    async fn ping(&self) -> Result<(), DatabaseError>;

    async fn get_user(&self, id: &str) -> Result<Option<User>, DatabaseError>;
    /// Insert, or overwrite the profile fields and refresh `updated_at`
    async fn upsert_user(&self, user: UpsertUser) -> Result<User, DatabaseError>;

    async fn user_notes(&self, user_id: &str) -> Result<Vec<Note>, DatabaseError>;
    async fn create_note(&self, note: NewNote) -> Result<Note, DatabaseError>;
    async fn delete_note(&self, id: &str, user_id: &str) -> Result<(), DatabaseError>;

    async fn user_highlights(&self, user_id: &str) -> Result<Vec<Highlight>, DatabaseError>;
    async fn create_highlight(&self, highlight: NewHighlight) -> Result<Highlight, DatabaseError>;
    async fn delete_highlight(&self, id: &str, user_id: &str) -> Result<(), DatabaseError>;

    async fn user_favorites(&self, user_id: &str) -> Result<Vec<Favorite>, DatabaseError>;
    async fn create_favorite(&self, favorite: NewFavorite) -> Result<Favorite, DatabaseError>;
    async fn delete_favorite(&self, id: &str, user_id: &str) -> Result<(), DatabaseError>;

    async fn user_reading_progress(
        &self,
        user_id: &str,
        plan_id: Option<&str>,
    ) -> Result<Vec<ReadingProgress>, DatabaseError>;
    /// Merge on (user, plan, day); `completed_at` tracks `completed`
    async fn upsert_reading_progress(
        &self,
        progress: NewReadingProgress,
    ) -> Result<ReadingProgress, DatabaseError>;

    async fn user_quiz_attempts(&self, user_id: &str) -> Result<Vec<QuizAttempt>, DatabaseError>;
    async fn create_quiz_attempt(
        &self,
        attempt: NewQuizAttempt,
    ) -> Result<QuizAttempt, DatabaseError>;

    async fn user_flashcard_progress(
        &self,
        user_id: &str,
    ) -> Result<Vec<FlashcardProgress>, DatabaseError>;
    /// Merge on (user, flashcard); every write refreshes `last_reviewed`
    async fn upsert_flashcard_progress(
        &self,
        progress: NewFlashcardProgress,
    ) -> Result<FlashcardProgress, DatabaseError>;

    async fn user_devotional_readings(
        &self,
        user_id: &str,
    ) -> Result<Vec<DevotionalReading>, DatabaseError>;
    /// Append-only: every call records a new reading
    async fn mark_devotional_as_read(
        &self,
        user_id: &str,
        devotional_id: &str,
    ) -> Result<(), DatabaseError>;
}
