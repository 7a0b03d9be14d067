// handlers/public/mod.rs - Public handlers (no authentication required)

use axum::{extract::State, http::StatusCode};
use serde_json::{json, Value};

use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

/// GET / - Service descriptor
pub async fn root() -> ApiResult<Value> {
    Ok(ApiResponse::success(json!({
        "name": "Scripture API",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Bible-study backend: notes, highlights, favorites, reading plans, quizzes and flashcards",
        "endpoints": {
            "health": "/health (public)",
            "auth": "/api/auth/user, /api/auth/callback (protected)",
            "notes": "/api/notes[/:id] (protected)",
            "highlights": "/api/highlights[/:id] (protected)",
            "favorites": "/api/favorites[/:id] (protected)",
            "progress": "/api/reading-progress, /api/flashcard-progress, /api/devotional-readings (protected)",
            "quiz": "/api/quiz-attempts, /api/quiz/questions (protected)",
            "catalog": "/api/bible/*, /api/devotionals, /api/reading-plans, /api/qa, /api/multimedia, /api/flashcards (protected)",
        }
    })))
}

/// GET /health - 200 when the store answers, 503 otherwise
pub async fn health(State(state): State<AppState>) -> ApiResult<Value> {
    let now = chrono::Utc::now();

    match state.storage.ping().await {
        Ok(()) => Ok(ApiResponse::success(json!({
            "status": "ok",
            "timestamp": now,
            "database": "ok"
        }))),
        Err(e) => {
            tracing::warn!(error = %e, "Health check failed");
            Ok(ApiResponse::with_status(
                json!({
                    "status": "degraded",
                    "timestamp": now,
                    "database": "unavailable"
                }),
                StatusCode::SERVICE_UNAVAILABLE,
            ))
        }
    }
}
