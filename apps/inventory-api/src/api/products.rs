//! Product routes

use axum::Router;
use domain_inventory::{PgProductRepository, PgStoreRepository, ProductService, handlers};

use crate::state::AppState;

pub fn router(state: &AppState) -> Router {
    let products = PgProductRepository::new(state.db.clone());
    let stores = PgStoreRepository::new(state.db.clone());
    handlers::products::router(ProductService::new(products, stores))
}
