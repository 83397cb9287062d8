use anyhow::Context;
use persistence::db::{DatabaseConfig, create_postgres_pool};
use sqlx::PgPool;

/// Initialize database connection pool from environment variables
///
/// See [`DatabaseConfig::from_env`] for the variables read. Migrations are
/// not applied here, the `migrator` binary owns the schema.
pub async fn init_database() -> anyhow::Result<PgPool> {
    let config = DatabaseConfig::from_env();
    let pool = create_postgres_pool(&config)
        .await
        .context("failed to connect to the database")?;
    tracing::info!(
        max_connections = config.max_connections,
        "database pool ready"
    );
    Ok(pool)
}
