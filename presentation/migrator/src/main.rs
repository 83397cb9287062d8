mod cli;

use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::Parser;
use dotenvy::dotenv;
use persistence::db::{
    DatabaseConfig, create_postgres_pool, current_migration_version, drop_schema, run_migrations,
    undo_last_migration,
};

use cli::{Action, Cli, is_confirmed};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();

    if let Action::Drop { yes: false } = cli.action
        && !confirm_drop()?
    {
        println!("Operation canceled");
        return Ok(());
    }

    let config = match cli.database_url {
        Some(url) => DatabaseConfig::new(url),
        None => DatabaseConfig::from_env(),
    };
    let pool = create_postgres_pool(&config)
        .await
        .context("failed to connect to the database")?;

    match cli.action {
        Action::Up => {
            run_migrations(&pool, &cli.migrations_path)
                .await
                .context("failed to run migrations")?;
            tracing::info!(path = %cli.migrations_path, "migrations applied");
        }
        Action::Down => {
            match undo_last_migration(&pool, &cli.migrations_path)
                .await
                .context("failed to roll back migration")?
            {
                Some(version) => tracing::info!(version, "migration reverted"),
                None => println!("No migrations have been applied"),
            }
        }
        Action::Version => {
            match current_migration_version(&pool)
                .await
                .context("failed to read migration version")?
            {
                Some(current) if current.dirty => {
                    println!("Current migration version: {} (dirty)", current.version)
                }
                Some(current) => println!("Current migration version: {}", current.version),
                None => println!("No migrations have been applied"),
            }
        }
        Action::Drop { .. } => {
            drop_schema(&pool)
                .await
                .context("failed to drop database tables")?;
            tracing::info!("all tables dropped");
        }
    }

    pool.close().await;
    Ok(())
}

fn confirm_drop() -> anyhow::Result<bool> {
    print!("Are you sure you want to drop all database tables? (y/N): ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(is_confirmed(&answer))
}
