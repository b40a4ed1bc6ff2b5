use anyhow::Result;
use sqlx::postgres::{PgPool, PgPoolOptions};

pub type DbPool = PgPool;

/// Create a Postgres pool.
pub async fn create_pool(database_url: &str) -> Result<DbPool> {
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;
    Ok(pool)
}

/// Apply the SQL files in `migrations/`.
pub async fn run_migrations(pool: &DbPool) -> Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
