//! # Axum Helpers
//!
//! Shared HTTP plumbing for the inventory service.
//!
//! ## Modules
//!
//! - **[`errors`]**: [`AppError`] and the `{success: false, message, errors?}` error envelope
//! - **[`response`]**: [`ApiResponse`], the `{success: true, message, data?, pagination?}` envelope
//! - **[`extractors`]**: [`ValidatedJson`], [`ValidatedQuery`], [`UuidPath`]
//! - **[`http`]**: CORS and security header middleware
//! - **[`server`]**: router assembly, health/readiness, graceful shutdown

pub mod errors;
pub mod extractors;
pub mod http;
pub mod response;
pub mod server;

pub use errors::{AppError, ErrorCode, ErrorResponse};
pub use extractors::{UuidPath, ValidatedJson, ValidatedQuery};
pub use response::{ApiResponse, PaginationMeta};
pub use server::{create_production_app, create_router, health_router};
