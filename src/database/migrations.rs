//! Versioned schema migrations.
//!
//! Each version is a list of statements applied in one transaction. The
//! whole run holds a transaction-scoped advisory lock so several processes
//! starting at once apply each version exactly once.

use sqlx::{PgPool, Row};
use tracing::info;

use super::manager::DatabaseError;

/// Arbitrary key for `pg_advisory_xact_lock`
const MIGRATION_LOCK_KEY: i64 = 0x5343_5249_5054;

/// Ordered migrations: (version, name, statements)
const MIGRATIONS: &[(i32, &str, &[&str])] = &[
    (1, "initial_schema", MIGRATION_V1),
    (2, "natural_key_indexes", MIGRATION_V2),
];

const MIGRATION_V1: &[&str] = &[
    r#"CREATE TABLE users (
        id TEXT PRIMARY KEY DEFAULT gen_random_uuid()::text,
        email TEXT UNIQUE,
        first_name TEXT,
        last_name TEXT,
        profile_image_url TEXT,
        created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )"#,
    r#"CREATE TABLE bible_books (
        id TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        testament VARCHAR(10) NOT NULL CHECK (testament IN ('old', 'new')),
        "order" INTEGER NOT NULL,
        chapters INTEGER NOT NULL,
        abbreviation VARCHAR(10) NOT NULL
    )"#,
    r#"CREATE TABLE bible_verses (
        id TEXT PRIMARY KEY DEFAULT gen_random_uuid()::text,
        book_id TEXT NOT NULL REFERENCES bible_books(id),
        chapter INTEGER NOT NULL,
        verse INTEGER NOT NULL,
        version VARCHAR(10) NOT NULL DEFAULT 'NVI',
        text TEXT NOT NULL
    )"#,
    r#"CREATE TABLE notes (
        id TEXT PRIMARY KEY DEFAULT gen_random_uuid()::text,
        user_id TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
        book_id TEXT NOT NULL REFERENCES bible_books(id),
        chapter INTEGER NOT NULL,
        verse INTEGER NOT NULL,
        content TEXT NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )"#,
    r#"CREATE TABLE highlights (
        id TEXT PRIMARY KEY DEFAULT gen_random_uuid()::text,
        user_id TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
        book_id TEXT NOT NULL REFERENCES bible_books(id),
        chapter INTEGER NOT NULL,
        verse INTEGER NOT NULL,
        color VARCHAR(20) NOT NULL DEFAULT 'yellow'
            CHECK (color IN ('yellow', 'green', 'blue', 'pink')),
        created_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )"#,
    r#"CREATE TABLE devotionals (
        id TEXT PRIMARY KEY DEFAULT gen_random_uuid()::text,
        title TEXT NOT NULL,
        content TEXT NOT NULL,
        image_url TEXT,
        date DATE NOT NULL,
        verse_reference TEXT,
        created_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )"#,
    r#"CREATE TABLE devotional_readings (
        id TEXT PRIMARY KEY DEFAULT gen_random_uuid()::text,
        user_id TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
        devotional_id TEXT NOT NULL REFERENCES devotionals(id) ON DELETE CASCADE,
        read_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )"#,
    r#"CREATE TABLE reading_plans (
        id TEXT PRIMARY KEY DEFAULT gen_random_uuid()::text,
        name TEXT NOT NULL,
        description TEXT,
        duration INTEGER NOT NULL,
        type VARCHAR(20) NOT NULL DEFAULT 'annual' CHECK (type IN ('annual', 'thematic'))
    )"#,
    r#"CREATE TABLE reading_plan_days (
        id TEXT PRIMARY KEY DEFAULT gen_random_uuid()::text,
        plan_id TEXT NOT NULL REFERENCES reading_plans(id) ON DELETE CASCADE,
        day INTEGER NOT NULL,
        book_id TEXT NOT NULL REFERENCES bible_books(id),
        start_chapter INTEGER NOT NULL,
        end_chapter INTEGER NOT NULL
    )"#,
    r#"CREATE TABLE reading_progress (
        id TEXT PRIMARY KEY DEFAULT gen_random_uuid()::text,
        user_id TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
        plan_id TEXT NOT NULL REFERENCES reading_plans(id) ON DELETE CASCADE,
        day INTEGER NOT NULL,
        completed BOOLEAN NOT NULL DEFAULT false,
        completed_at TIMESTAMPTZ
    )"#,
    r#"CREATE TABLE qa_items (
        id TEXT PRIMARY KEY DEFAULT gen_random_uuid()::text,
        question TEXT NOT NULL,
        answer TEXT NOT NULL,
        category VARCHAR(50),
        created_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )"#,
    r#"CREATE TABLE multimedia_content (
        id TEXT PRIMARY KEY DEFAULT gen_random_uuid()::text,
        title TEXT NOT NULL,
        description TEXT,
        type VARCHAR(20) NOT NULL CHECK (type IN ('video', 'podcast', 'music')),
        url TEXT NOT NULL,
        thumbnail_url TEXT,
        duration INTEGER,
        category VARCHAR(50),
        created_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )"#,
    r#"CREATE TABLE favorites (
        id TEXT PRIMARY KEY DEFAULT gen_random_uuid()::text,
        user_id TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
        item_type VARCHAR(20) NOT NULL CHECK (item_type IN ('verse', 'devotional', 'multimedia')),
        item_id TEXT NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )"#,
    r#"CREATE TABLE quiz_questions (
        id TEXT PRIMARY KEY DEFAULT gen_random_uuid()::text,
        question TEXT NOT NULL,
        options TEXT[] NOT NULL,
        correct_answer INTEGER NOT NULL,
        category VARCHAR(50),
        difficulty VARCHAR(20) DEFAULT 'medium'
    )"#,
    r#"CREATE TABLE quiz_attempts (
        id TEXT PRIMARY KEY DEFAULT gen_random_uuid()::text,
        user_id TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
        score INTEGER NOT NULL,
        total_questions INTEGER NOT NULL,
        completed_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )"#,
    r#"CREATE TABLE flashcards (
        id TEXT PRIMARY KEY DEFAULT gen_random_uuid()::text,
        book_id TEXT NOT NULL REFERENCES bible_books(id),
        chapter INTEGER NOT NULL,
        verse INTEGER NOT NULL,
        verse_text TEXT NOT NULL,
        category VARCHAR(50)
    )"#,
    r#"CREATE TABLE flashcard_progress (
        id TEXT PRIMARY KEY DEFAULT gen_random_uuid()::text,
        user_id TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
        flashcard_id TEXT NOT NULL REFERENCES flashcards(id) ON DELETE CASCADE,
        learned BOOLEAN NOT NULL DEFAULT false,
        last_reviewed TIMESTAMPTZ NOT NULL DEFAULT now()
    )"#,
];

// Natural keys for the two merge-on-conflict tables, plus the per-user
// lookup paths every list endpoint takes.
const MIGRATION_V2: &[&str] = &[
    "CREATE UNIQUE INDEX reading_progress_user_plan_day_key ON reading_progress (user_id, plan_id, day)",
    "CREATE UNIQUE INDEX flashcard_progress_user_card_key ON flashcard_progress (user_id, flashcard_id)",
    "CREATE INDEX notes_user_created_idx ON notes (user_id, created_at DESC)",
    "CREATE INDEX highlights_user_created_idx ON highlights (user_id, created_at DESC)",
    "CREATE INDEX favorites_user_created_idx ON favorites (user_id, created_at DESC)",
    "CREATE INDEX quiz_attempts_user_completed_idx ON quiz_attempts (user_id, completed_at DESC)",
    "CREATE INDEX devotional_readings_user_read_idx ON devotional_readings (user_id, read_at DESC)",
    "CREATE INDEX bible_verses_lookup_idx ON bible_verses (book_id, chapter, version, verse)",
    "CREATE INDEX reading_plan_days_plan_idx ON reading_plan_days (plan_id, day)",
];

/// Latest schema version this build knows about
pub fn latest_version() -> i32 {
    MIGRATIONS.last().map(|(version, _, _)| *version).unwrap_or(0)
}

/// Apply every pending migration. Returns the number applied.
pub async fn run_migrations(pool: &PgPool) -> Result<usize, DatabaseError> {
    let mut tx = pool.begin().await?;

    sqlx::query("SELECT pg_advisory_xact_lock($1)")
        .bind(MIGRATION_LOCK_KEY)
        .execute(&mut *tx)
        .await?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS _migrations (
            version INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            applied_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )",
    )
    .execute(&mut *tx)
    .await?;

    let row = sqlx::query("SELECT COALESCE(MAX(version), 0) AS version FROM _migrations")
        .fetch_one(&mut *tx)
        .await?;
    let current: i32 = row.try_get("version")?;

    info!(
        current_version = current,
        target_version = latest_version(),
        "Checking database migrations"
    );

    let mut applied = 0;
    for (version, name, statements) in MIGRATIONS.iter().filter(|(v, _, _)| *v > current) {
        for statement in statements.iter() {
            sqlx::query(statement)
                .execute(&mut *tx)
                .await
                .map_err(|e| DatabaseError::Migration(format!("v{} {}: {}", version, name, e)))?;
        }

        sqlx::query("INSERT INTO _migrations (version, name) VALUES ($1, $2)")
            .bind(version)
            .bind(name)
            .execute(&mut *tx)
            .await?;

        info!("Applied migration v{} ({})", version, name);
        applied += 1;
    }

    tx.commit().await?;
    Ok(applied)
}
