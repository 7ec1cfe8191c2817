use axum::{Router, extract::State, routing::get};
use axum_helpers::{
    ApiResponse, UuidPath, ValidatedJson, ValidatedQuery,
    errors::responses::{
        BadRequestUuidResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::InventoryResult;
use crate::models::{CreateStore, ListStoresQuery, Store, UpdateStore};
use crate::repository::StoreRepository;
use crate::service::StoreService;

pub const TAG: &str = "stores";

#[derive(OpenApi)]
#[openapi(
    paths(list_stores, create_store, get_store, update_store, delete_store),
    components(
        schemas(Store, CreateStore, UpdateStore),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            InternalServerErrorResponse
        )
    ),
    tags((name = TAG, description = "Store management"))
)]
pub struct StoresApiDoc;

pub fn router<S: StoreRepository + 'static>(service: StoreService<S>) -> Router {
    Router::new()
        .route("/", get(list_stores).post(create_store))
        .route(
            "/{id}",
            get(get_store).put(update_store).delete(delete_store),
        )
        .with_state(Arc::new(service))
}

/// List stores, newest first
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    params(ListStoresQuery),
    responses(
        (status = 200, description = "Page of stores", body = ApiResponse<Vec<Store>>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_stores<S: StoreRepository>(
    State(service): State<Arc<StoreService<S>>>,
    ValidatedQuery(query): ValidatedQuery<ListStoresQuery>,
) -> InventoryResult<ApiResponse<Vec<Store>>> {
    let (stores, pagination) = service.list_stores(query.pagination()).await?;
    Ok(ApiResponse::paginated(stores, pagination))
}

/// Create a store
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreateStore,
    responses(
        (status = 200, description = "Store created", body = ApiResponse<Store>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_store<S: StoreRepository>(
    State(service): State<Arc<StoreService<S>>>,
    ValidatedJson(input): ValidatedJson<CreateStore>,
) -> InventoryResult<ApiResponse<Store>> {
    let store = service.create_store(input).await?;
    Ok(ApiResponse::ok(store))
}

/// Get a store by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(("id" = Uuid, Path, description = "Store ID")),
    responses(
        (status = 200, description = "Store found", body = ApiResponse<Store>),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_store<S: StoreRepository>(
    State(service): State<Arc<StoreService<S>>>,
    UuidPath(id): UuidPath,
) -> InventoryResult<ApiResponse<Store>> {
    let store = service.get_store(id).await?;
    Ok(ApiResponse::ok(store))
}

/// Update a store; only the fields present are changed
#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    params(("id" = Uuid, Path, description = "Store ID")),
    request_body = UpdateStore,
    responses(
        (status = 200, description = "Store updated", body = ApiResponse<Store>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_store<S: StoreRepository>(
    State(service): State<Arc<StoreService<S>>>,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<UpdateStore>,
) -> InventoryResult<ApiResponse<Store>> {
    let store = service.update_store(id, input).await?;
    Ok(ApiResponse::ok(store))
}

/// Delete a store together with its products
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(("id" = Uuid, Path, description = "Store ID")),
    responses(
        (status = 200, description = "Store deleted", example = json!({"success": true, "message": "OK"})),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_store<S: StoreRepository>(
    State(service): State<Arc<StoreService<S>>>,
    UuidPath(id): UuidPath,
) -> InventoryResult<ApiResponse<()>> {
    service.delete_store(id).await?;
    Ok(ApiResponse::empty())
}
