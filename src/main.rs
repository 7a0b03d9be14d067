use scripture_api::auth::TokenVerifier;
use scripture_api::config::config;
use scripture_api::database::{migrations, DatabaseManager};
use scripture_api::{app, AppState};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("scripture_api=info,tower_http=info")),
        )
        .init();

    // Initialize configuration (this loads the config singleton)
    let config = config();
    tracing::info!("Starting Scripture API in {:?} mode", config.environment);

    let verifier = match TokenVerifier::from_config(&config.security) {
        Ok(verifier) => verifier,
        Err(e) => {
            tracing::error!("Cannot verify bearer tokens: {}. Set JWT_SECRET.", e);
            std::process::exit(1);
        }
    };
    if config.security.uses_development_secret() {
        tracing::warn!(
            "Bearer tokens are checked against the built-in development secret; set JWT_SECRET"
        );
    }

    let pool = DatabaseManager::connect_lazy(&config.database)?;
    if config.database.auto_migrate {
        match migrations::run_migrations(&pool).await {
            Ok(applied) => {
                tracing::info!("Database schema ready ({} migration(s) applied)", applied)
            }
            // Keep serving; /health reports the store as degraded
            Err(e) => tracing::warn!("Skipping migrations, database unavailable: {}", e),
        }
    }

    let app = app(AppState::postgres(pool, verifier), config);

    let bind_addr = format!("0.0.0.0:{}", config.api.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    tracing::info!("Scripture API listening on http://{}", bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
