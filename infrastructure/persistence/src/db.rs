use sqlx::{PgPool, migrate::Migrator, postgres::PgPoolOptions};
use std::{path::Path, time::Duration};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("database.connection_error")]
    ConnectionError,
    #[error("database.migration_error")]
    MigrationError,
    #[error("database.migrations_not_found")]
    MigrationsNotFound,
    #[error("database.query_error")]
    QueryError,
}

/// Configuration for the database connection
pub struct DatabaseConfig {
    pub connection_string: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl DatabaseConfig {
    /// Creates a new database configuration with default values
    pub fn new(connection_string: String) -> Self {
        Self {
            connection_string,
            max_connections: 5,
            acquire_timeout: Duration::from_secs(30),
        }
    }

    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections;
        self
    }

    /// Loads the configuration from environment variables
    ///
    /// Environment variables:
    /// - DATABASE_URL: full connection string, wins over the parts below
    /// - DB_HOST, DB_PORT, DB_USER, DB_PASSWORD, DB_NAME, DB_SSLMODE
    /// - DB_MAX_CONNECTIONS (default: 5)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str, default: &str| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let connection_string = match lookup("DATABASE_URL").filter(|url| !url.is_empty()) {
            Some(url) => url,
            None => format!(
                "postgres://{}:{}@{}:{}/{}?sslmode={}",
                var("DB_USER", "postgres"),
                var("DB_PASSWORD", "password"),
                var("DB_HOST", "localhost"),
                var("DB_PORT", "5432"),
                var("DB_NAME", "shopping_list_db"),
                var("DB_SSLMODE", "disable"),
            ),
        };

        let config = Self::new(connection_string);
        match lookup("DB_MAX_CONNECTIONS").and_then(|v| v.parse().ok()) {
            Some(max_connections) => config.with_max_connections(max_connections),
            None => config,
        }
    }
}

/// Latest applied migration as recorded by sqlx.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationVersion {
    pub version: i64,
    /// The migration started but did not finish successfully.
    pub dirty: bool,
}

/// Creates a PostgreSQL connection pool
pub async fn create_postgres_pool(config: &DatabaseConfig) -> Result<PgPool, DatabaseError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(&config.connection_string)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "failed to connect to database");
            DatabaseError::ConnectionError
        })?;

    Ok(pool)
}

async fn load_migrator(migrations_path: &str) -> Result<Migrator, DatabaseError> {
    let path = Path::new(migrations_path);

    if !path.exists() {
        return Err(DatabaseError::MigrationsNotFound);
    }

    Migrator::new(path).await.map_err(|e| {
        tracing::error!(error = %e, path = migrations_path, "failed to load migrations");
        DatabaseError::MigrationError
    })
}

/// Runs database migrations from the specified directory
pub async fn run_migrations(pool: &PgPool, migrations_path: &str) -> Result<(), DatabaseError> {
    load_migrator(migrations_path)
        .await?
        .run(pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "failed to apply migrations");
            DatabaseError::MigrationError
        })
}

/// Reverts the most recently applied migration.
///
/// Returns the version that was reverted, or `None` when nothing is applied.
pub async fn undo_last_migration(
    pool: &PgPool,
    migrations_path: &str,
) -> Result<Option<i64>, DatabaseError> {
    let migrator = load_migrator(migrations_path).await?;

    if !migrations_table_exists(pool).await? {
        return Ok(None);
    }

    let applied: Vec<i64> =
        sqlx::query_scalar("SELECT version FROM _sqlx_migrations ORDER BY version DESC LIMIT 2")
            .fetch_all(pool)
            .await
            .map_err(query_error)?;

    let Some(&latest) = applied.first() else {
        return Ok(None);
    };
    let target = applied.get(1).copied().unwrap_or(0);

    migrator.undo(pool, target).await.map_err(|e| {
        tracing::error!(error = %e, version = latest, "failed to revert migration");
        DatabaseError::MigrationError
    })?;

    Ok(Some(latest))
}

/// Reads the latest applied migration, `None` when no migration ever ran.
pub async fn current_migration_version(
    pool: &PgPool,
) -> Result<Option<MigrationVersion>, DatabaseError> {
    if !migrations_table_exists(pool).await? {
        return Ok(None);
    }

    let row: Option<(i64, bool)> = sqlx::query_as(
        "SELECT version, success FROM _sqlx_migrations ORDER BY version DESC LIMIT 1",
    )
    .fetch_optional(pool)
    .await
    .map_err(query_error)?;

    Ok(row.map(|(version, success)| MigrationVersion {
        version,
        dirty: !success,
    }))
}

/// Drops every application table together with the migration history.
pub async fn drop_schema(pool: &PgPool) -> Result<(), DatabaseError> {
    sqlx::query("DROP TABLE IF EXISTS items, shopping_lists, _sqlx_migrations CASCADE")
        .execute(pool)
        .await
        .map_err(query_error)?;

    Ok(())
}

async fn migrations_table_exists(pool: &PgPool) -> Result<bool, DatabaseError> {
    sqlx::query_scalar("SELECT to_regclass('_sqlx_migrations') IS NOT NULL")
        .fetch_one(pool)
        .await
        .map_err(query_error)
}

fn query_error(err: sqlx::Error) -> DatabaseError {
    tracing::error!(error = %err, "migration bookkeeping query failed");
    DatabaseError::QueryError
}
