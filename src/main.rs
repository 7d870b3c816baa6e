//! TerraVerde Discovery Backend
//!
//! REST backend serving the community and place discovery catalogs to the TerraVerde frontend.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use terraverde_backend::catalog::{communities, places};
use terraverde_backend::config::Config;
use terraverde_backend::{create_router, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting TerraVerde Discovery Backend");
    tracing::info!("Bind address: {}", config.bind_addr);

    // Build the catalogs; fails on invalid fixture data (duplicate ids)
    let communities = Arc::new(communities::catalog()?);
    let places = Arc::new(places::catalog()?);
    tracing::info!(
        "Catalogs loaded: {} communities, {} places",
        communities.len(),
        places.len()
    );

    // Create application state
    let state = AppState {
        communities,
        places,
    };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
