//! Inventory API - REST server for stores and products

use axum_helpers::server::{create_production_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use database::common::RetryConfig;
use domain_inventory::{PgProductRepository, PgStoreRepository, seed};
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    let config = Config::from_env()?;

    init_tracing(&config.environment);

    let db = database::postgres::connect_with_retry(
        config.database.clone(),
        RetryConfig::new().with_max_retries(5),
    )
    .await
    .map_err(|e| eyre::eyre!("PostgreSQL connection failed: {}", e))?;

    database::postgres::run_migrations::<migration::Migrator>(&db, config.app.name).await?;

    if config.seed_database {
        let stores = PgStoreRepository::new(db.clone());
        let products = PgProductRepository::new(db.clone());
        if let Some(summary) = seed::seed_if_empty(&stores, &products)
            .await
            .map_err(|e| eyre::eyre!("Seeding failed: {}", e))?
        {
            info!(
                stores = summary.stores,
                products = summary.products,
                "Database seeded"
            );
        }
    }

    let state = AppState { config, db };

    let api_routes = api::routes(&state);

    // create_router adds docs/middleware to our composed routes
    let router = create_router::<openapi::ApiDoc>(api_routes, &state.config.cors_origins)?;

    // - /health: liveness check with app name/version
    // - /ready: readiness check with a real database ping
    let app = router
        .merge(health_router(state.config.app))
        .merge(api::ready_router(state.clone()));

    info!(
        port = state.config.server.port,
        environment = ?state.config.environment,
        "Starting Inventory API"
    );

    let server_config = state.config.server.clone();
    let db = state.db.clone();

    create_production_app(app, &server_config, async move {
        info!("Shutting down: closing database connections");
        match db.close().await {
            Ok(_) => info!("PostgreSQL connection closed successfully"),
            Err(e) => tracing::error!("Error closing PostgreSQL: {}", e),
        }
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Inventory API shutdown complete");
    Ok(())
}
