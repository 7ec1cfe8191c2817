use axum::{Router, extract::State, routing::get};
use axum_helpers::{
    ApiResponse, UuidPath, ValidatedJson, ValidatedQuery,
    errors::responses::{
        BadRequestRuleResponse, BadRequestUuidResponse, BadRequestValidationResponse,
        InternalServerErrorResponse, NotFoundResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::InventoryResult;
use crate::models::{CreateProduct, ListProductsQuery, ProductResponse, UpdateProduct};
use crate::repository::{ProductRepository, StoreRepository};
use crate::service::ProductService;

pub const TAG: &str = "products";

#[derive(OpenApi)]
#[openapi(
    paths(list_products, create_product, get_product, update_product, delete_product),
    components(
        schemas(ProductResponse, CreateProduct, UpdateProduct),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            BadRequestRuleResponse,
            InternalServerErrorResponse
        )
    ),
    tags((name = TAG, description = "Product management; prices are written in cents and read in major units"))
)]
pub struct ProductsApiDoc;

type SharedService<P, S> = State<Arc<ProductService<P, S>>>;

pub fn router<P, S>(service: ProductService<P, S>) -> Router
where
    P: ProductRepository + 'static,
    S: StoreRepository + 'static,
{
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .with_state(Arc::new(service))
}

/// List products matching the filters, newest first
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    params(ListProductsQuery),
    responses(
        (status = 200, description = "Page of products", body = ApiResponse<Vec<ProductResponse>>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<P: ProductRepository, S: StoreRepository>(
    State(service): SharedService<P, S>,
    ValidatedQuery(query): ValidatedQuery<ListProductsQuery>,
) -> InventoryResult<ApiResponse<Vec<ProductResponse>>> {
    let (products, pagination) = service
        .list_products(query.filter(), query.pagination())
        .await?;

    let products = products.into_iter().map(ProductResponse::from).collect();
    Ok(ApiResponse::paginated(products, pagination))
}

/// Create a product in an existing store
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreateProduct,
    responses(
        (status = 200, description = "Product created", body = ApiResponse<ProductResponse>),
        (status = 400, response = BadRequestRuleResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<P: ProductRepository, S: StoreRepository>(
    State(service): SharedService<P, S>,
    ValidatedJson(input): ValidatedJson<CreateProduct>,
) -> InventoryResult<ApiResponse<ProductResponse>> {
    let product = service.create_product(input).await?;
    Ok(ApiResponse::ok(product.into()))
}

/// Get a product by ID, with its store
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(("id" = Uuid, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product found", body = ApiResponse<ProductResponse>),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<P: ProductRepository, S: StoreRepository>(
    State(service): SharedService<P, S>,
    UuidPath(id): UuidPath,
) -> InventoryResult<ApiResponse<ProductResponse>> {
    let product = service.get_product(id).await?;
    Ok(ApiResponse::ok(product.into()))
}

/// Update a product; only the fields present are changed
#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    params(("id" = Uuid, Path, description = "Product ID")),
    request_body = UpdateProduct,
    responses(
        (status = 200, description = "Product updated", body = ApiResponse<ProductResponse>),
        (status = 400, response = BadRequestRuleResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_product<P: ProductRepository, S: StoreRepository>(
    State(service): SharedService<P, S>,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<UpdateProduct>,
) -> InventoryResult<ApiResponse<ProductResponse>> {
    let product = service.update_product(id, input).await?;
    Ok(ApiResponse::ok(product.into()))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(("id" = Uuid, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product deleted", example = json!({"success": true, "message": "OK"})),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<P: ProductRepository, S: StoreRepository>(
    State(service): SharedService<P, S>,
    UuidPath(id): UuidPath,
) -> InventoryResult<ApiResponse<()>> {
    service.delete_product(id).await?;
    Ok(ApiResponse::empty())
}
