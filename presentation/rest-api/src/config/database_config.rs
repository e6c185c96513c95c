use anyhow::Context;
use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;
use std::env;

const DEFAULT_MIGRATIONS_PATH: &str = "./migrations";

/// Initialize database connection pool from environment variables and apply migrations
///
/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string (required)
/// - DATABASE_MAX_CONNECTIONS: pool size (default: 5)
/// - MIGRATIONS_PATH: sqlx migrations directory (default: "./migrations")
///
/// # Errors
/// Returns error if DATABASE_URL is not set, the connection fails or a migration fails
pub async fn init_database() -> anyhow::Result<PgPool> {
    let db_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let config = database_config(db_url, env::var("DATABASE_MAX_CONNECTIONS").ok());
    let pool = create_postgres_pool(&config).await?;

    let migrations_path =
        env::var("MIGRATIONS_PATH").unwrap_or_else(|_| DEFAULT_MIGRATIONS_PATH.to_string());
    run_migrations(&pool, &migrations_path).await?;
    tracing::info!("Database migrations applied from {}", migrations_path);

    Ok(pool)
}

fn database_config(db_url: String, max_connections: Option<String>) -> DatabaseConfig {
    let config = DatabaseConfig::new(db_url);
    match max_connections.and_then(|raw| raw.parse::<u32>().ok()) {
        Some(max) => config.with_max_connections(max),
        None => config,
    }
}
