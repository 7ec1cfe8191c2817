//! Analytics routes

use axum::Router;
use domain_inventory::{AnalyticsService, PgProductRepository, PgStoreRepository, handlers};

use crate::state::AppState;

pub fn router(state: &AppState) -> Router {
    let products = PgProductRepository::new(state.db.clone());
    let stores = PgStoreRepository::new(state.db.clone());
    let service = AnalyticsService::new(products, stores)
        .with_low_stock_threshold(state.config.low_stock_threshold);
    handlers::analytics::router(service)
}
