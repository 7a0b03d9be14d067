use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method},
    middleware,
    routing::{delete, get},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::config::{AppConfig, SecurityConfig};
use crate::handlers::{protected, public};
use crate::middleware::jwt_auth_middleware;
use crate::state::AppState;

/// Full application router: public probes plus the token-guarded `/api/*`
/// surface, with CORS, body limit and optional request tracing.
pub fn app(state: AppState, config: &AppConfig) -> Router {
    let protected = Router::new()
        .merge(auth_routes())
        .merge(annotation_routes())
        .merge(progress_routes())
        .merge(catalog_routes())
        .route_layer(middleware::from_fn_with_state(state.clone(), jwt_auth_middleware));

    let mut router = Router::new()
        // Public
        .route("/", get(public::root))
        .route("/health", get(public::health))
        // Protected
        .merge(protected)
        // Global middleware
        .layer(DefaultBodyLimit::max(config.api.max_request_size_bytes))
        .layer(cors_layer(&config.security));

    if config.api.enable_request_logging {
        router = router.layer(TraceLayer::new_for_http());
    }

    router.with_state(state)
}

fn auth_routes() -> Router<AppState> {
    use axum::routing::post;
    use protected::user;

    Router::new()
        .route("/api/auth/user", get(user::current))
        .route("/api/auth/callback", post(user::callback))
}

fn annotation_routes() -> Router<AppState> {
    use protected::{favorites, highlights, notes};

    Router::new()
        .route("/api/notes", get(notes::list).post(notes::create))
        .route("/api/notes/:id", delete(notes::delete))
        .route("/api/highlights", get(highlights::list).post(highlights::create))
        .route("/api/highlights/:id", delete(highlights::delete))
        .route("/api/favorites", get(favorites::list).post(favorites::create))
        .route("/api/favorites/:id", delete(favorites::delete))
}

fn progress_routes() -> Router<AppState> {
    use protected::{devotional_readings, flashcard_progress, quiz_attempts, reading_progress};

    Router::new()
        .route(
            "/api/reading-progress",
            get(reading_progress::list).post(reading_progress::update),
        )
        .route(
            "/api/quiz-attempts",
            get(quiz_attempts::list).post(quiz_attempts::create),
        )
        .route(
            "/api/flashcard-progress",
            get(flashcard_progress::list).post(flashcard_progress::update),
        )
        .route(
            "/api/devotional-readings",
            get(devotional_readings::list).post(devotional_readings::mark_read),
        )
}

fn catalog_routes() -> Router<AppState> {
    use protected::catalog;

    Router::new()
        .route("/api/bible/books", get(catalog::books))
        .route("/api/bible/books/:book_id/chapters/:chapter", get(catalog::chapter))
        .route("/api/devotionals", get(catalog::devotionals))
        .route("/api/devotionals/:id", get(catalog::devotional))
        .route("/api/reading-plans", get(catalog::reading_plans))
        .route("/api/reading-plans/:id/days", get(catalog::reading_plan_days))
        .route("/api/qa", get(catalog::qa_items))
        .route("/api/multimedia", get(catalog::multimedia))
        .route("/api/quiz/questions", get(catalog::quiz_questions))
        .route("/api/flashcards", get(catalog::flashcards))
}

/// `*` anywhere in the list allows every origin
fn cors_layer(security: &SecurityConfig) -> CorsLayer {
    if security.cors_origins.iter().any(|origin| origin == "*") {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = security
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
}
