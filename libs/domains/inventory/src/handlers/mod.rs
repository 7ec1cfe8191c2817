//! HTTP handlers, one router per resource.
//!
//! Routers carry their service as state and are nested by the application:
//! `/stores`, `/products`, `/analytics`.

pub mod analytics;
pub mod products;
pub mod stores;

pub use analytics::AnalyticsApiDoc;
pub use products::ProductsApiDoc;
pub use stores::StoresApiDoc;
