use anyhow::Context;
use pizzahunt_api::{app, AppState};
use pizzahunt_catalog::CatalogEngine;
use pizzahunt_store::{Config, SpoonacularClient};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pizzahunt_api=debug,pizzahunt_catalog=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("Failed to load config")?;
    tracing::info!("Starting Pizza Hunt API on port {}", config.server.port);

    let settings = config.catalog_settings();
    if settings.api_key.is_none() {
        tracing::warn!("No Spoonacular API key configured, the fallback menu will be served");
    }

    let client = SpoonacularClient::from_config(&config.spoonacular)
        .context("Failed to build recipe client")?;
    let catalog = CatalogEngine::new(Arc::new(client), settings);

    let app_state = AppState::new(catalog);
    let items = app_state.catalog.fetch_catalog().await;
    tracing::info!("Menu ready with {} pizzas", items.len());

    let app = app(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
