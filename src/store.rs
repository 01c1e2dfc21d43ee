//! Database bootstrap: create the target database and connect the pool.

use crate::config::DatabaseConfig;
use crate::error::AppError;
use crate::sql::quoted;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{ConnectOptions, PgPool};

/// Ensure the database named in `opts` exists; create it if not. Connects to the
/// default `postgres` database to run CREATE DATABASE. Call before creating the main pool.
pub async fn ensure_database_exists(opts: &PgConnectOptions) -> Result<(), AppError> {
    let db_name = match opts.get_database() {
        Some(name) if !name.is_empty() && name != "postgres" => name.to_string(),
        _ => return Ok(()),
    };
    let mut conn: sqlx::PgConnection = opts.clone().database("postgres").connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        sqlx::query(&format!("CREATE DATABASE {}", quoted(&db_name)))
            .execute(&mut conn)
            .await?;
        tracing::info!(database = %db_name, "created database");
    }
    Ok(())
}

/// Create the schema if missing. `public` always exists.
pub async fn ensure_schema(pool: &PgPool, schema: &str) -> Result<(), AppError> {
    if schema != "public" {
        sqlx::query(&format!("CREATE SCHEMA IF NOT EXISTS {}", quoted(schema)))
            .execute(pool)
            .await?;
    }
    Ok(())
}

/// Connect a pool sized from config.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, AppError> {
    let opts = config.connect_options()?;
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(opts)
        .await?;
    Ok(pool)
}
