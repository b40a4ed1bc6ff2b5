use styler_api::{
    config::AppConfig,
    db::{create_pool, run_migrations},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;
    let database_url = config
        .database_url
        .ok_or_else(|| anyhow::anyhow!("DATABASE_URL must be set to run migrations"))?;
    let pool = create_pool(&database_url).await?;
    run_migrations(&pool).await?;
    println!("Migrations applied");
    Ok(())
}
