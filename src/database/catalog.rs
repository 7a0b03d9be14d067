use async_trait::async_trait;

use super::manager::DatabaseError;
use super::models::{
    BibleBook, BibleVerse, Devotional, Flashcard, MediaType, MultimediaContent, QaItem,
    QuizQuestion, ReadingPlan, ReadingPlanDay,
};
use super::postgres::PgStorage;

/// Read-only access to seeded reference data
#[async_trait]
pub trait Catalog: Send + Sync {
    /// All books in canonical order
    async fn books(&self) -> Result<Vec<BibleBook>, DatabaseError>;
    async fn chapter_verses(
        &self,
        book_id: &str,
        chapter: i32,
        version: &str,
    ) -> Result<Vec<BibleVerse>, DatabaseError>;

    /// Newest date first
    async fn devotionals(&self) -> Result<Vec<Devotional>, DatabaseError>;
    async fn devotional(&self, id: &str) -> Result<Option<Devotional>, DatabaseError>;

    async fn reading_plans(&self) -> Result<Vec<ReadingPlan>, DatabaseError>;
    async fn reading_plan_days(&self, plan_id: &str) -> Result<Vec<ReadingPlanDay>, DatabaseError>;

    async fn qa_items(&self, category: Option<&str>) -> Result<Vec<QaItem>, DatabaseError>;
    async fn multimedia(
        &self,
        media_type: Option<MediaType>,
    ) -> Result<Vec<MultimediaContent>, DatabaseError>;
    async fn quiz_questions(
        &self,
        category: Option<&str>,
        difficulty: Option<&str>,
    ) -> Result<Vec<QuizQuestion>, DatabaseError>;
    async fn flashcards(&self, category: Option<&str>) -> Result<Vec<Flashcard>, DatabaseError>;
}

#[async_trait]
impl Catalog for PgStorage {
    async fn books(&self) -> Result<Vec<BibleBook>, DatabaseError> {
        let books = sqlx::query_as::<_, BibleBook>(
            r#"SELECT id, name, testament, "order", chapters, abbreviation
               FROM bible_books
               ORDER BY "order""#,
        )
        .fetch_all(self.pool())
        .await?;

        Ok(books)
    }

    async fn chapter_verses(
        &self,
        book_id: &str,
        chapter: i32,
        version: &str,
    ) -> Result<Vec<BibleVerse>, DatabaseError> {
        let verses = sqlx::query_as::<_, BibleVerse>(
            "SELECT id, book_id, chapter, verse, version, text
             FROM bible_verses
             WHERE book_id = $1 AND chapter = $2 AND version = $3
             ORDER BY verse",
        )
        .bind(book_id)
        .bind(chapter)
        .bind(version)
        .fetch_all(self.pool())
        .await?;

        Ok(verses)
    }

    async fn devotionals(&self) -> Result<Vec<Devotional>, DatabaseError> {
        let devotionals = sqlx::query_as::<_, Devotional>(
            "SELECT id, title, content, image_url, date, verse_reference, created_at
             FROM devotionals
             ORDER BY date DESC, id",
        )
        .fetch_all(self.pool())
        .await?;

        Ok(devotionals)
    }

    async fn devotional(&self, id: &str) -> Result<Option<Devotional>, DatabaseError> {
        let devotional = sqlx::query_as::<_, Devotional>(
            "SELECT id, title, content, image_url, date, verse_reference, created_at
             FROM devotionals
             WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool())
        .await?;

        Ok(devotional)
    }

    async fn reading_plans(&self) -> Result<Vec<ReadingPlan>, DatabaseError> {
        let plans = sqlx::query_as::<_, ReadingPlan>(
            "SELECT id, name, description, duration, type
             FROM reading_plans
             ORDER BY type, name",
        )
        .fetch_all(self.pool())
        .await?;

        Ok(plans)
    }

    async fn reading_plan_days(&self, plan_id: &str) -> Result<Vec<ReadingPlanDay>, DatabaseError> {
        let days = sqlx::query_as::<_, ReadingPlanDay>(
            r#"SELECT d.id, d.plan_id, d.day, d.book_id, d.start_chapter, d.end_chapter
               FROM reading_plan_days d
               JOIN bible_books b ON b.id = d.book_id
               WHERE d.plan_id = $1
               ORDER BY d.day, b."order""#,
        )
        .bind(plan_id)
        .fetch_all(self.pool())
        .await?;

        Ok(days)
    }

    async fn qa_items(&self, category: Option<&str>) -> Result<Vec<QaItem>, DatabaseError> {
        let items = sqlx::query_as::<_, QaItem>(
            "SELECT id, question, answer, category, created_at
             FROM qa_items
             WHERE ($1::text IS NULL OR category = $1)
             ORDER BY created_at, id",
        )
        .bind(category)
        .fetch_all(self.pool())
        .await?;

        Ok(items)
    }

    async fn multimedia(
        &self,
        media_type: Option<MediaType>,
    ) -> Result<Vec<MultimediaContent>, DatabaseError> {
        let items = sqlx::query_as::<_, MultimediaContent>(
            "SELECT id, title, description, type, url, thumbnail_url, duration, category, created_at
             FROM multimedia_content
             WHERE ($1::text IS NULL OR type = $1)
             ORDER BY created_at DESC, id",
        )
        .bind(media_type.map(|t| t.as_str()))
        .fetch_all(self.pool())
        .await?;

        Ok(items)
    }

    async fn quiz_questions(
        &self,
        category: Option<&str>,
        difficulty: Option<&str>,
    ) -> Result<Vec<QuizQuestion>, DatabaseError> {
        let questions = sqlx::query_as::<_, QuizQuestion>(
            "SELECT id, question, options, correct_answer, category, difficulty
             FROM quiz_questions
             WHERE ($1::text IS NULL OR category = $1)
               AND ($2::text IS NULL OR difficulty = $2)
             ORDER BY id",
        )
        .bind(category)
        .bind(difficulty)
        .fetch_all(self.pool())
        .await?;

        Ok(questions)
    }

    async fn flashcards(&self, category: Option<&str>) -> Result<Vec<Flashcard>, DatabaseError> {
        let cards = sqlx::query_as::<_, Flashcard>(
            "SELECT id, book_id, chapter, verse, verse_text, category
             FROM flashcards
             WHERE ($1::text IS NULL OR category = $1)
             ORDER BY id",
        )
        .bind(category)
        .fetch_all(self.pool())
        .await?;

        Ok(cards)
    }
}
