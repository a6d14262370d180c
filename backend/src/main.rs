//! Catalog server entry point.

use std::sync::Arc;

use anyhow::Context;
use backend::{config::BackendConfig, db_utils::catalog_store::CatalogStore, server_extra};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = BackendConfig::load()?;
    let store = CatalogStore::load_seed(&config.seed_path).await?;
    let app = server_extra::router(Arc::new(store));

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port))
        .await
        .with_context(|| format!("failed to bind port {}", config.port))?;
    tracing::info!("Catalog server listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
