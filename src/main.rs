use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use climate_api::config::AppConfig;
use climate_api::{db, web};

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .init();

    let pool = db::connect(&config.database.path)
        .await
        .with_context(|| format!("Failed to open dataset at {}", config.database.path))?;

    web::run(&config.server, pool).await
}
