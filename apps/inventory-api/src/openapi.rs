//! OpenAPI documentation configuration

use axum_helpers::{ErrorResponse, PaginationMeta};
use domain_inventory::handlers::{AnalyticsApiDoc, ProductsApiDoc, StoresApiDoc};
use utoipa::OpenApi;

/// Combined OpenAPI documentation for Inventory API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Inventory API",
        version = "0.1.0",
        description = "Stores, the products they carry and inventory reports"
    ),
    nest(
        (path = "/api/v1/stores", api = StoresApiDoc),
        (path = "/api/v1/products", api = ProductsApiDoc),
        (path = "/api/v1/analytics", api = AnalyticsApiDoc)
    ),
    components(schemas(ErrorResponse, PaginationMeta))
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_resource() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

        for expected in [
            "/api/v1/stores",
            "/api/v1/stores/{id}",
            "/api/v1/products",
            "/api/v1/products/{id}",
            "/api/v1/analytics/products-stores",
            "/api/v1/analytics/stores/{storeId}/products-by-category",
            "/api/v1/analytics/low-stock",
        ] {
            assert!(paths.contains(&expected), "missing {} in {:?}", expected, paths);
        }
    }
}
