use async_trait::async_trait;
use sqlx::PgPool;

use super::manager::{DatabaseError, DatabaseManager};
use super::models::{
    DevotionalReading, Favorite, FlashcardProgress, Highlight, NewFavorite, NewFlashcardProgress,
    NewHighlight, NewNote, NewQuizAttempt, NewReadingProgress, Note, QuizAttempt,
    ReadingProgress, UpsertUser, User,
};
use super::storage::Storage;

/// PostgreSQL implementation of [`Storage`] and [`super::Catalog`]
#[derive(Clone)]
pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl Storage for PgStorage {
    async fn ping(&self) -> Result<(), DatabaseError> {
        DatabaseManager::health_check(&self.pool).await
    }

    async fn get_user(&self, id: &str) -> Result<Option<User>, DatabaseError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, email, first_name, last_name, profile_image_url, created_at, updated_at
             FROM users
             WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn upsert_user(&self, user: UpsertUser) -> Result<User, DatabaseError> {
        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (id, email, first_name, last_name, profile_image_url)
             VALUES ($1, $2, $3, $4, $5)
             ON CONFLICT (id) DO UPDATE SET
                 email = EXCLUDED.email,
                 first_name = EXCLUDED.first_name,
                 last_name = EXCLUDED.last_name,
                 profile_image_url = EXCLUDED.profile_image_url,
                 updated_at = now()
             RETURNING id, email, first_name, last_name, profile_image_url, created_at, updated_at",
        )
        .bind(&user.id)
        .bind(&user.email)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.profile_image_url)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    async fn user_notes(&self, user_id: &str) -> Result<Vec<Note>, DatabaseError> {
        let notes = sqlx::query_as::<_, Note>(
            "SELECT id, user_id, book_id, chapter, verse, content, created_at, updated_at
             FROM notes
             WHERE user_id = $1
             ORDER BY created_at DESC, id DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(notes)
    }

    async fn create_note(&self, note: NewNote) -> Result<Note, DatabaseError> {
        let note = sqlx::query_as::<_, Note>(
            "INSERT INTO notes (user_id, book_id, chapter, verse, content)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id, user_id, book_id, chapter, verse, content, created_at, updated_at",
        )
        .bind(&note.user_id)
        .bind(&note.book_id)
        .bind(note.chapter)
        .bind(note.verse)
        .bind(&note.content)
        .fetch_one(&self.pool)
        .await?;

        Ok(note)
    }

    async fn delete_note(&self, id: &str, user_id: &str) -> Result<(), DatabaseError> {
        sqlx::query("DELETE FROM notes WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn user_highlights(&self, user_id: &str) -> Result<Vec<Highlight>, DatabaseError> {
        let highlights = sqlx::query_as::<_, Highlight>(
            "SELECT id, user_id, book_id, chapter, verse, color, created_at
             FROM highlights
             WHERE user_id = $1
             ORDER BY created_at DESC, id DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(highlights)
    }

    async fn create_highlight(&self, highlight: NewHighlight) -> Result<Highlight, DatabaseError> {
        let highlight = sqlx::query_as::<_, Highlight>(
            "INSERT INTO highlights (user_id, book_id, chapter, verse, color)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id, user_id, book_id, chapter, verse, color, created_at",
        )
        .bind(&highlight.user_id)
        .bind(&highlight.book_id)
        .bind(highlight.chapter)
        .bind(highlight.verse)
        .bind(highlight.color.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(highlight)
    }

    async fn delete_highlight(&self, id: &str, user_id: &str) -> Result<(), DatabaseError> {
        sqlx::query("DELETE FROM highlights WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn user_favorites(&self, user_id: &str) -> Result<Vec<Favorite>, DatabaseError> {
        let favorites = sqlx::query_as::<_, Favorite>(
            "SELECT id, user_id, item_type, item_id, created_at
             FROM favorites
             WHERE user_id = $1
             ORDER BY created_at DESC, id DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(favorites)
    }

    async fn create_favorite(&self, favorite: NewFavorite) -> Result<Favorite, DatabaseError> {
        let favorite = sqlx::query_as::<_, Favorite>(
            "INSERT INTO favorites (user_id, item_type, item_id)
             VALUES ($1, $2, $3)
             RETURNING id, user_id, item_type, item_id, created_at",
        )
        .bind(&favorite.user_id)
        .bind(favorite.item.item_type())
        .bind(favorite.item.item_id())
        .fetch_one(&self.pool)
        .await?;

        Ok(favorite)
    }

    async fn delete_favorite(&self, id: &str, user_id: &str) -> Result<(), DatabaseError> {
        sqlx::query("DELETE FROM favorites WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn user_reading_progress(
        &self,
        user_id: &str,
        plan_id: Option<&str>,
    ) -> Result<Vec<ReadingProgress>, DatabaseError> {
        // A NULL plan filter matches every plan
        let progress = sqlx::query_as::<_, ReadingProgress>(
            "SELECT id, user_id, plan_id, day, completed, completed_at
             FROM reading_progress
             WHERE user_id = $1 AND ($2::text IS NULL OR plan_id = $2)
             ORDER BY plan_id, day",
        )
        .bind(user_id)
        .bind(plan_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(progress)
    }

    async fn upsert_reading_progress(
        &self,
        progress: NewReadingProgress,
    ) -> Result<ReadingProgress, DatabaseError> {
        let progress = sqlx::query_as::<_, ReadingProgress>(
            "INSERT INTO reading_progress (user_id, plan_id, day, completed, completed_at)
             VALUES ($1, $2, $3, $4, CASE WHEN $4 THEN now() ELSE NULL END)
             ON CONFLICT (user_id, plan_id, day) DO UPDATE SET
                 completed = EXCLUDED.completed,
                 completed_at = EXCLUDED.completed_at
             RETURNING id, user_id, plan_id, day, completed, completed_at",
        )
        .bind(&progress.user_id)
        .bind(&progress.plan_id)
        .bind(progress.day)
        .bind(progress.completed)
        .fetch_one(&self.pool)
        .await?;

        Ok(progress)
    }

    async fn user_quiz_attempts(&self, user_id: &str) -> Result<Vec<QuizAttempt>, DatabaseError> {
        let attempts = sqlx::query_as::<_, QuizAttempt>(
            "SELECT id, user_id, score, total_questions, completed_at
             FROM quiz_attempts
             WHERE user_id = $1
             ORDER BY completed_at DESC, id DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(attempts)
    }

    async fn create_quiz_attempt(
        &self,
        attempt: NewQuizAttempt,
    ) -> Result<QuizAttempt, DatabaseError> {
        let attempt = sqlx::query_as::<_, QuizAttempt>(
            "INSERT INTO quiz_attempts (user_id, score, total_questions)
             VALUES ($1, $2, $3)
             RETURNING id, user_id, score, total_questions, completed_at",
        )
        .bind(&attempt.user_id)
        .bind(attempt.score)
        .bind(attempt.total_questions)
        .fetch_one(&self.pool)
        .await?;

        Ok(attempt)
    }

    async fn user_flashcard_progress(
        &self,
        user_id: &str,
    ) -> Result<Vec<FlashcardProgress>, DatabaseError> {
        let progress = sqlx::query_as::<_, FlashcardProgress>(
            "SELECT id, user_id, flashcard_id, learned, last_reviewed
             FROM flashcard_progress
             WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(progress)
    }

    async fn upsert_flashcard_progress(
        &self,
        progress: NewFlashcardProgress,
    ) -> Result<FlashcardProgress, DatabaseError> {
        let progress = sqlx::query_as::<_, FlashcardProgress>(
            "INSERT INTO flashcard_progress (user_id, flashcard_id, learned)
             VALUES ($1, $2, $3)
             ON CONFLICT (user_id, flashcard_id) DO UPDATE SET
                 learned = EXCLUDED.learned,
                 last_reviewed = now()
             RETURNING id, user_id, flashcard_id, learned, last_reviewed",
        )
        .bind(&progress.user_id)
        .bind(&progress.flashcard_id)
        .bind(progress.learned)
        .fetch_one(&self.pool)
        .await?;

        Ok(progress)
    }

    async fn user_devotional_readings(
        &self,
        user_id: &str,
    ) -> Result<Vec<DevotionalReading>, DatabaseError> {
        let readings = sqlx::query_as::<_, DevotionalReading>(
            "SELECT id, user_id, devotional_id, read_at
             FROM devotional_readings
             WHERE user_id = $1
             ORDER BY read_at DESC, id DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(readings)
    }

    async fn mark_devotional_as_read(
        &self,
        user_id: &str,
        devotional_id: &str,
    ) -> Result<(), DatabaseError> {
        sqlx::query("INSERT INTO devotional_readings (user_id, devotional_id) VALUES ($1, $2)")
            .bind(user_id)
            .bind(devotional_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
