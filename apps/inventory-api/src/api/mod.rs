//! API routes module

pub mod analytics;
pub mod health;
pub mod products;
pub mod stores;

use axum::Router;
use axum_helpers::health_router;

use crate::state::AppState;

pub use health::ready_router;

/// Versioned API routes, nested under `/api` by `create_router`
pub fn routes(state: &AppState) -> Router {
    let v1 = Router::new()
        .nest("/stores", stores::router(state))
        .nest("/products", products::router(state))
        .nest("/analytics", analytics::router(state))
        .merge(health_router(state.config.app));

    Router::new().nest("/v1", v1)
}
