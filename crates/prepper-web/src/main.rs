//! Sgt. Prepper storefront server entry point.

use std::sync::Arc;

use prepper_core::clock::SystemClock;
use prepper_http::{HttpAuthApi, HttpCatalogApi};
use prepper_storage::{FileStore, MemoryStore};
use prepper_web::config::AppConfig;
use prepper_web::error::AppError;
use prepper_web::state::{AppState, Services};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting Sgt. Prepper storefront");

    let config = AppConfig::from_env()?;
    let addr = config.socket_addr()?;
    tracing::info!(
        api_url = %config.api_url,
        asset_url = %config.asset_url,
        cart_file = %config.cart_file.display(),
        "configuration loaded"
    );

    let services = Services {
        catalog: Arc::new(HttpCatalogApi::new(&config.api_url)?),
        auth: Arc::new(HttpAuthApi::new(&config.api_url)?),
        cart_storage: Arc::new(FileStore::new(config.cart_file.clone())),
        session_storage: Arc::new(MemoryStore::new()),
        clock: Arc::new(SystemClock),
    };
    let app = prepper_web::app(AppState::new(config, services)?);

    tracing::info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
