//! Database bootstrap: create the database if missing, the seven level tables, and the pool.

use crate::config::{Level, Settings};
use crate::error::AppError;
use crate::sql::{create_parent_index, create_table};
use sqlx::postgres::PgPoolOptions;
use sqlx::{ConnectOptions, PgPool};
use std::time::Duration;

/// How long a request may wait for a pooled connection. Long enough that a burst queues
/// behind busy connections instead of failing.
pub const POOL_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(24 * 60 * 60);

/// Ensure the configured database exists; create it if not. Connects to the default
/// `postgres` database to run CREATE DATABASE. Call before creating the main pool.
pub async fn ensure_database_exists(settings: &Settings) -> Result<(), AppError> {
    let db_name = settings.db_name.as_str();
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let mut conn = settings
        .connect_options()
        .database("postgres")
        .connect()
        .await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Create the level tables (parents first) and their parent-key indexes if missing.
pub async fn ensure_tables(pool: &PgPool) -> Result<(), AppError> {
    for level in Level::ALL {
        sqlx::query(&create_table(level)).execute(pool).await?;
        if let Some(ddl) = create_parent_index(level) {
            sqlx::query(&ddl).execute(pool).await?;
        }
    }
    Ok(())
}

fn pool_options(settings: &Settings) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(settings.db_max_connections)
        .acquire_timeout(POOL_ACQUIRE_TIMEOUT)
}

/// Pool sized from settings. Requests wait on the pool when every connection is in use.
pub async fn create_pool(settings: &Settings) -> Result<PgPool, AppError> {
    let pool = pool_options(settings)
        .connect_with(settings.connect_options())
        .await?;
    Ok(pool)
}
