//! Store routes

use axum::Router;
use domain_inventory::{PgStoreRepository, StoreService, handlers};

use crate::state::AppState;

pub fn router(state: &AppState) -> Router {
    let repository = PgStoreRepository::new(state.db.clone());
    handlers::stores::router(StoreService::new(repository))
}
