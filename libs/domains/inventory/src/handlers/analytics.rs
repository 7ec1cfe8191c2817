use axum::{Router, extract::State, routing::get};
use axum_helpers::{
    ApiResponse, PaginationMeta, UuidPath, ValidatedQuery,
    errors::responses::{
        BadRequestUuidResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::InventoryResult;
use crate::models::{
    CategoryProductCount, InventoryValue, LowStockQuery, ProductResponse, ProductsStoresSummary,
    StoreProductCount,
};
use crate::repository::{ProductRepository, StoreRepository};
use crate::service::AnalyticsService;

pub const TAG: &str = "analytics";

#[derive(OpenApi)]
#[openapi(
    paths(
        products_stores,
        products_by_store,
        products_by_category,
        inventory_value,
        low_stock,
    ),
    components(
        schemas(
            ProductsStoresSummary,
            StoreProductCount,
            CategoryProductCount,
            InventoryValue,
            ProductResponse
        ),
        responses(
            NotFoundResponse,
            BadRequestUuidResponse,
            BadRequestValidationResponse,
            InternalServerErrorResponse
        )
    ),
    tags((name = TAG, description = "Aggregate inventory reports"))
)]
pub struct AnalyticsApiDoc;

type SharedService<P, S> = State<Arc<AnalyticsService<P, S>>>;

pub fn router<P, S>(service: AnalyticsService<P, S>) -> Router
where
    P: ProductRepository + 'static,
    S: StoreRepository + 'static,
{
    Router::new()
        .route("/products-stores", get(products_stores))
        .route("/products-by-store", get(products_by_store))
        .route(
            "/stores/{storeId}/products-by-category",
            get(products_by_category),
        )
        .route("/stores/{storeId}/inventory-value", get(inventory_value))
        .route("/low-stock", get(low_stock))
        .with_state(Arc::new(service))
}

/// Product and store totals with the floored average products per store
#[utoipa::path(
    get,
    path = "/products-stores",
    tag = TAG,
    responses(
        (status = 200, description = "Summary", body = ApiResponse<ProductsStoresSummary>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn products_stores<P: ProductRepository, S: StoreRepository>(
    State(service): SharedService<P, S>,
) -> InventoryResult<ApiResponse<ProductsStoresSummary>> {
    let summary = service.products_stores_summary().await?;
    Ok(ApiResponse::ok(summary))
}

/// Number of products in each store that has any
#[utoipa::path(
    get,
    path = "/products-by-store",
    tag = TAG,
    responses(
        (status = 200, description = "Counts per store", body = ApiResponse<Vec<StoreProductCount>>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn products_by_store<P: ProductRepository, S: StoreRepository>(
    State(service): SharedService<P, S>,
) -> InventoryResult<ApiResponse<Vec<StoreProductCount>>> {
    let counts = service.products_by_store().await?;
    Ok(ApiResponse::ok(counts))
}

/// Number of products per category within one store
#[utoipa::path(
    get,
    path = "/stores/{storeId}/products-by-category",
    tag = TAG,
    params(("storeId" = Uuid, Path, description = "Store ID")),
    responses(
        (status = 200, description = "Counts per category", body = ApiResponse<Vec<CategoryProductCount>>),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn products_by_category<P: ProductRepository, S: StoreRepository>(
    State(service): SharedService<P, S>,
    UuidPath(store_id): UuidPath,
) -> InventoryResult<ApiResponse<Vec<CategoryProductCount>>> {
    let counts = service.products_by_category(store_id).await?;
    Ok(ApiResponse::ok(counts))
}

/// Total stock value of one store (Σ price × quantity, major units)
#[utoipa::path(
    get,
    path = "/stores/{storeId}/inventory-value",
    tag = TAG,
    params(("storeId" = Uuid, Path, description = "Store ID")),
    responses(
        (status = 200, description = "Inventory value", body = ApiResponse<InventoryValue>),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn inventory_value<P: ProductRepository, S: StoreRepository>(
    State(service): SharedService<P, S>,
    UuidPath(store_id): UuidPath,
) -> InventoryResult<ApiResponse<InventoryValue>> {
    let value = service.inventory_value(store_id).await?;
    Ok(ApiResponse::ok(value))
}

/// Products at or below the stock threshold, highest quantity first
#[utoipa::path(
    get,
    path = "/low-stock",
    tag = TAG,
    params(LowStockQuery),
    responses(
        (status = 200, description = "Low-stock products on a single page", body = ApiResponse<Vec<ProductResponse>>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn low_stock<P: ProductRepository, S: StoreRepository>(
    State(service): SharedService<P, S>,
    ValidatedQuery(query): ValidatedQuery<LowStockQuery>,
) -> InventoryResult<ApiResponse<Vec<ProductResponse>>> {
    let products: Vec<ProductResponse> = service
        .low_stock(query.threshold)
        .await?
        .into_iter()
        .map(ProductResponse::from)
        .collect();

    let pagination = PaginationMeta::single_page(products.len() as u64);
    Ok(ApiResponse::paginated(products, pagination))
}
