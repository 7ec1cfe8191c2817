//! Inventory Domain
//!
//! Stores and the products they carry, plus aggregate reports over both.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, response envelopes
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │  Services   │  ← store existence, SKU uniqueness, reports
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← traits + in-memory and PostgreSQL implementations
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← domain types, DTOs, SeaORM entities
//! └─────────────┘
//! ```
//!
//! Prices are integer minor units everywhere below the handlers and are only
//! turned into decimals in [`ProductResponse`].
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_inventory::{
//!     handlers, in_memory_repositories, ProductService, StoreService,
//! };
//!
//! let (stores, products) = in_memory_repositories();
//! let router = axum::Router::new()
//!     .nest("/stores", handlers::stores::router(StoreService::new(stores.clone())))
//!     .nest("/products", handlers::products::router(ProductService::new(products, stores)));
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod seed;
pub mod service;

pub use error::{InventoryError, InventoryResult};
pub use models::{
    CategoryProductCount, CreateProduct, CreateStore, InventoryValue, ListProductsQuery,
    ListStoresQuery, LowStockQuery, MAX_PRICE, Pagination, Product, ProductFilter,
    ProductResponse, ProductsStoresSummary, Store, StoreProductCount, UpdateProduct, UpdateStore,
};
pub use postgres::{PgProductRepository, PgStoreRepository};
pub use repository::{
    InMemoryProductRepository, InMemoryStoreRepository, ProductRepository, StoreRepository,
    in_memory_repositories,
};
pub use service::{AnalyticsService, ProductService, StoreService};
