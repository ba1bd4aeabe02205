//! Storefront API - REST server for the automotive-equipment shop

use axum_helpers::{create_production_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_catalog::{CatalogService, CategoryIndex, MongoProductSource};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod db;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!("Connecting to MongoDB at {}", config.mongodb.url());

    let mongo_client = db::connect_with_retry(&config.mongodb, 3).await?;
    let db = mongo_client.database(config.mongodb.database());

    info!(
        "Successfully connected to MongoDB database: {}",
        config.mongodb.database()
    );

    let catalog = Arc::new(CatalogService::new(
        MongoProductSource::new(&db),
        CategoryIndex::default(),
    ));

    let state = AppState {
        config: config.clone(),
        mongo_client,
        db,
        catalog,
    };

    // Initialize indexes
    api::init_indexes(&state).await?;

    // Warm the catalog snapshot; a failure here is not fatal, the
    // snapshot stays empty with the error surfaced on /api/products
    state.catalog.refresh().await;
    if let Some(error) = state.catalog.snapshot().await.error {
        tracing::warn!("Initial catalog fetch failed: {}", error);
    }

    // Build the router
    let api_routes = api::routes(&state);
    let router = create_router::<openapi::ApiDoc>(api_routes).await?;
    let app = router
        .merge(health_router(state.config.app))
        .merge(api::health::router(state.clone()));

    let server_config = state.config.server.clone();
    info!("Starting Storefront API on port {}", server_config.port);

    // Run with graceful shutdown
    create_production_app(
        app,
        &server_config,
        Duration::from_secs(30),
        async move {
            info!("Shutting down: closing MongoDB connections");
            drop(state.mongo_client);
            info!("MongoDB connection closed");
        },
    )
    .await?;

    info!("Storefront API shutdown complete");
    Ok(())
}
