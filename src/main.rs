use anyhow::Context;
use tracing_subscriber::EnvFilter;

use relief_grid_api::config::AppConfig;
use relief_grid_api::state::AppState;
use relief_grid_api::{database, routes};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env();
    tracing::info!("Starting relief-grid-api in {:?} mode", config.environment);

    // A missing or unreachable store is not fatal: the server boots and the
    // registration routes answer degraded/unavailable until it comes back.
    let db = if config.database.url.is_some() {
        match database::connect(&config.database).await {
            Ok(pool) => Some(pool),
            Err(e) => {
                tracing::warn!("Database unavailable, serving degraded: {}", e);
                None
            }
        }
    } else {
        tracing::warn!("DATABASE_URL not set, serving degraded");
        None
    };

    let port = config.server.port;
    let app = routes::app(AppState::new(db, config));

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("relief-grid-api listening on http://{}", bind_addr);

    axum::serve(listener, app).await.context("server")?;
    Ok(())
}
