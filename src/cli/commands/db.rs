use anyhow::Context;
use serde_json::json;
use sqlx::PgPool;

use crate::cli::OutputFormat;
use crate::config::config;
use crate::database::{migrations, seed as reference, DatabaseManager};

async fn connect() -> anyhow::Result<PgPool> {
    let pool = DatabaseManager::connect_lazy(&config().database)
        .context("failed to configure database pool")?;
    DatabaseManager::health_check(&pool)
        .await
        .context("database is not reachable")?;
    Ok(pool)
}

pub async fn migrate(output_format: OutputFormat) -> anyhow::Result<()> {
    let pool = connect().await?;
    let applied = migrations::run_migrations(&pool).await.context("migration failed")?;

    match output_format {
        OutputFormat::Json => println!(
            "{}",
            json!({ "applied": applied, "version": migrations::latest_version() })
        ),
        OutputFormat::Text => println!(
            "Applied {} migration(s); schema at v{}",
            applied,
            migrations::latest_version()
        ),
    }
    Ok(())
}

pub async fn seed(run_migrations: bool, output_format: OutputFormat) -> anyhow::Result<()> {
    let pool = connect().await?;
    if run_migrations {
        migrations::run_migrations(&pool).await.context("migration failed")?;
    }

    let inserted = reference::seed(&pool).await.context("seeding failed")?;

    match output_format {
        OutputFormat::Json => println!("{}", json!({ "inserted": inserted })),
        OutputFormat::Text => println!("Inserted {} reference row(s)", inserted),
    }
    Ok(())
}
