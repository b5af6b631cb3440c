use anyhow::{Context, Result};
use sqlx::SqlitePool;
use tower_http::cors::{Any, CorsLayer};

use crate::api;
use crate::config::ServerConfig;

pub async fn run(server: &ServerConfig, pool: SqlitePool) -> Result<()> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = api::router(pool).layer(cors);

    let addr = format!("{}:{}", server.host, server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Climate API listening at http://{}", addr);
    axum::serve(listener, app)
        .await
        .context("Server terminated unexpectedly")?;
    Ok(())
}
