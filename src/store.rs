//! Connection pool construction and liveness ping.

use crate::config::AppConfig;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

fn pool_options(config: &AppConfig) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
}

/// Open the pool and verify one connection. The `books` table itself is managed outside this service.
pub async fn connect(config: &AppConfig) -> Result<PgPool, sqlx::Error> {
    let pool = pool_options(config).connect(&config.database_url).await?;
    tracing::info!(max_connections = config.max_connections, "database pool ready");
    Ok(pool)
}

/// Pool that connects on first use. Startup succeeds even when the database is down.
pub fn connect_lazy(config: &AppConfig) -> Result<PgPool, sqlx::Error> {
    pool_options(config).connect_lazy(&config.database_url)
}

pub async fn ping(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").fetch_optional(pool).await?;
    Ok(())
}
