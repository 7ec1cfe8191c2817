//! Handler tests for the Inventory domain
//!
//! These drive the three resource routers over HTTP with in-memory
//! repositories:
//! - Request deserialization and validation
//! - Response envelopes and pagination metadata
//! - Status codes for missing rows and conflicting SKUs
//!
//! The PostgreSQL repositories are covered in `integration_test.rs`.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_inventory::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use test_utils::TestDataBuilder;
use test_utils::assertions::assert_money_eq;
use tower::ServiceExt; // For oneshot()

fn app() -> Router {
    let (stores, products) = in_memory_repositories();

    Router::new()
        .nest(
            "/stores",
            handlers::stores::router(StoreService::new(stores.clone())),
        )
        .nest(
            "/products",
            handlers::products::router(ProductService::new(products.clone(), stores.clone())),
        )
        .nest(
            "/analytics",
            handlers::analytics::router(AnalyticsService::new(products, stores)),
        )
}

// Helper to parse JSON response body
async fn json_body(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    (status, json_body(response.into_body()).await)
}

async fn create_store(app: &Router, name: &str) -> String {
    let (status, body) = send(app, "POST", "/stores", Some(json!({ "name": name }))).await;
    assert_eq!(status, StatusCode::OK, "{}", body);
    body["data"]["id"].as_str().unwrap().to_string()
}

async fn create_product(
    app: &Router,
    store_id: &str,
    sku: &str,
    price: i64,
    quantity: i32,
) -> Value {
    let (status, body) = send(
        app,
        "POST",
        "/products",
        Some(json!({
            "sku": sku,
            "name": "Widget",
            "category": "Tools",
            "price": price,
            "quantity": quantity,
            "storeId": store_id,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{}", body);
    body["data"].clone()
}

#[tokio::test]
async fn test_create_store_returns_envelope() {
    let app = app();
    let builder = TestDataBuilder::from_test_name("create_store_envelope");

    let (status, body) = send(
        &app,
        "POST",
        "/stores",
        Some(json!({ "name": builder.name("store", "main") })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["message"], json!("OK"));
    assert_eq!(body["data"]["name"], json!(builder.name("store", "main")));
    assert!(body["data"].get("description").is_none());
    assert!(body["data"]["createdAt"].is_string());
}

#[tokio::test]
async fn test_create_store_validation_error_envelope() {
    let app = app();

    let (status, body) = send(&app, "POST", "/stores", Some(json!({ "name": "" }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], json!("Validation error"));
    assert!(body["errors"]["name"].is_string());
}

#[tokio::test]
async fn test_invalid_uuid_path_returns_400() {
    let app = app();

    let (status, body) = send(&app, "GET", "/stores/not-a-uuid", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
    assert!(body["errors"]["id"].is_string());
}

#[tokio::test]
async fn test_unknown_store_returns_404() {
    let app = app();
    let builder = TestDataBuilder::from_test_name("unknown_store");

    let uri = format!("/stores/{}", builder.missing_id());
    let (status, body) = send(&app, "GET", &uri, None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], json!("Store not found"));
}

#[tokio::test]
async fn test_update_store_keeps_omitted_fields() {
    let app = app();
    let (_, created) = send(
        &app,
        "POST",
        "/stores",
        Some(json!({ "name": "Harbor", "description": "By the docks" })),
    )
    .await;
    let id = created["data"]["id"].as_str().unwrap();

    let uri = format!("/stores/{}", id);
    let (status, body) = send(&app, "PUT", &uri, Some(json!({ "name": "Harbor Market" }))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], json!("Harbor Market"));
    assert_eq!(body["data"]["description"], json!("By the docks"));
}

#[tokio::test]
async fn test_list_stores_paginates() {
    let app = app();
    for i in 0..3 {
        create_store(&app, &format!("Store {}", i)).await;
    }

    let (status, body) = send(&app, "GET", "/stores?page=2&limit=2", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(
        body["pagination"],
        json!({ "page": 2, "limit": 2, "total": 3, "totalPages": 2 })
    );
}

#[tokio::test]
async fn test_list_stores_rejects_oversized_limit() {
    let app = app();

    let (status, body) = send(&app, "GET", "/stores?limit=101", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["errors"]["limit"].is_string());
}

#[tokio::test]
async fn test_create_product_for_unknown_store_returns_404() {
    let app = app();
    let builder = TestDataBuilder::from_test_name("product_unknown_store");

    let (status, body) = send(
        &app,
        "POST",
        "/products",
        Some(json!({
            "sku": builder.sku("a"),
            "name": "Widget",
            "category": "tools",
            "price": 100,
            "quantity": 1,
            "storeId": builder.missing_id(),
        })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], json!("Store not found"));
}

#[tokio::test]
async fn test_create_product_normalizes_and_converts_price() {
    let app = app();
    let store_id = create_store(&app, "Main").await;

    let product = create_product(&app, &store_id, "  ABC-123 ", 1999, 4).await;

    assert_eq!(product["sku"], json!("abc-123"));
    assert_eq!(product["category"], json!("tools"));
    assert_money_eq(product["price"].as_f64().unwrap(), 19.99, "price");
    assert_eq!(product["storeId"], json!(store_id));
}

#[tokio::test]
async fn test_get_product_embeds_store() {
    let app = app();
    let store_id = create_store(&app, "Embedded").await;
    let product = create_product(&app, &store_id, "emb-1", 500, 1).await;

    let uri = format!("/products/{}", product["id"].as_str().unwrap());
    let (status, body) = send(&app, "GET", &uri, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["store"]["id"], json!(store_id));
    assert_eq!(body["data"]["store"]["name"], json!("Embedded"));
}

#[tokio::test]
async fn test_duplicate_sku_after_normalization_returns_400() {
    let app = app();
    let store_id = create_store(&app, "Main").await;
    create_product(&app, &store_id, "ABC-1", 100, 1).await;

    let (status, body) = send(
        &app,
        "POST",
        "/products",
        Some(json!({
            "sku": " abc-1 ",
            "name": "Other",
            "category": "tools",
            "price": 200,
            "quantity": 2,
            "storeId": store_id,
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], json!("Product with this SKU already exists"));
}

#[tokio::test]
async fn test_update_product_sku_conflict_and_unchanged_sku() {
    let app = app();
    let store_id = create_store(&app, "Main").await;
    create_product(&app, &store_id, "taken", 100, 1).await;
    let product = create_product(&app, &store_id, "mine", 100, 1).await;
    let uri = format!("/products/{}", product["id"].as_str().unwrap());

    let (status, _) = send(&app, "PUT", &uri, Some(json!({ "sku": "TAKEN" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(
        &app,
        "PUT",
        &uri,
        Some(json!({ "sku": "mine", "quantity": 7 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["sku"], json!("mine"));
    assert_eq!(body["data"]["quantity"], json!(7));
}

#[tokio::test]
async fn test_create_product_rejects_invalid_fields() {
    let app = app();
    let store_id = create_store(&app, "Main").await;

    let (status, body) = send(
        &app,
        "POST",
        "/products",
        Some(json!({
            "sku": "neg",
            "name": "Widget",
            "category": "tools",
            "price": 0,
            "quantity": -1,
            "storeId": store_id,
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["errors"]["price"].is_string());
    assert!(body["errors"]["quantity"].is_string());
}

#[tokio::test]
async fn test_delete_store_cascades_to_products() {
    let app = app();
    let store_id = create_store(&app, "Doomed").await;
    let product = create_product(&app, &store_id, "gone", 100, 1).await;

    let (status, body) = send(&app, "DELETE", &format!("/stores/{}", store_id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true, "message": "OK" }));

    let uri = format!("/products/{}", product["id"].as_str().unwrap());
    let (status, body) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], json!("Product not found"));
}

#[tokio::test]
async fn test_list_products_default_page_size() {
    let app = app();
    let store_id = create_store(&app, "Bulk").await;
    for i in 0..25 {
        create_product(&app, &store_id, &format!("bulk-{:02}", i), 100, 1).await;
    }

    let (status, body) = send(&app, "GET", "/products", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 10);
    assert_eq!(
        body["pagination"],
        json!({ "page": 1, "limit": 10, "total": 25, "totalPages": 3 })
    );
}

#[tokio::test]
async fn test_list_products_filters_by_price_range() {
    let app = app();
    let store_id = create_store(&app, "Prices").await;
    for (sku, price) in [("p10", 1000), ("p20", 2000), ("p35", 3500), ("p50", 5000), ("p60", 6000)] {
        create_product(&app, &store_id, sku, price, 1).await;
    }

    let (status, body) = send(&app, "GET", "/products?minPrice=2000&maxPrice=5000", None).await;

    assert_eq!(status, StatusCode::OK);
    let mut skus: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["sku"].as_str().unwrap())
        .collect();
    skus.sort_unstable();
    assert_eq!(skus, vec!["p20", "p35", "p50"]);
    assert_eq!(body["pagination"]["total"], json!(3));
}

#[tokio::test]
async fn test_list_products_filters_by_store_and_category() {
    let app = app();
    let first = create_store(&app, "First").await;
    let second = create_store(&app, "Second").await;
    create_product(&app, &first, "f-1", 100, 1).await;
    create_product(&app, &second, "s-1", 100, 1).await;

    let uri = format!("/products?storeId={}&category=TOOLS", second);
    let (status, body) = send(&app, "GET", &uri, None).await;

    assert_eq!(status, StatusCode::OK);
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["sku"], json!("s-1"));
}

#[tokio::test]
async fn test_products_stores_summary_floors_average() {
    let app = app();

    let (status, body) = send(&app, "GET", "/analytics/products-stores", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["data"],
        json!({ "productCount": 0, "storeCount": 0, "averageProductCount": 0 })
    );

    let first = create_store(&app, "First").await;
    create_store(&app, "Second").await;
    for i in 0..5 {
        create_product(&app, &first, &format!("avg-{}", i), 100, 1).await;
    }

    let (_, body) = send(&app, "GET", "/analytics/products-stores", None).await;
    assert_eq!(
        body["data"],
        json!({ "productCount": 5, "storeCount": 2, "averageProductCount": 2 })
    );
}

#[tokio::test]
async fn test_products_by_store_skips_empty_stores() {
    let app = app();
    let busy = create_store(&app, "Busy").await;
    create_store(&app, "Empty").await;
    create_product(&app, &busy, "b-1", 100, 1).await;
    create_product(&app, &busy, "b-2", 100, 1).await;

    let (status, body) = send(&app, "GET", "/analytics/products-by-store", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!([{ "storeId": busy, "products": 2 }]));
}

#[tokio::test]
async fn test_products_by_category_for_unknown_store_returns_404() {
    let app = app();
    let builder = TestDataBuilder::from_test_name("category_unknown_store");

    let uri = format!(
        "/analytics/stores/{}/products-by-category",
        builder.missing_id()
    );
    let (status, _) = send(&app, "GET", &uri, None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_inventory_value_in_major_units() {
    let app = app();
    let store_id = create_store(&app, "Valued").await;
    create_product(&app, &store_id, "v-1", 1999, 3).await;
    create_product(&app, &store_id, "v-2", 500, 2).await;

    let uri = format!("/analytics/stores/{}/inventory-value", store_id);
    let (status, body) = send(&app, "GET", &uri, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["storeId"], json!(store_id));
    assert_money_eq(body["data"]["totalValue"].as_f64().unwrap(), 69.97, "totalValue");
}

#[tokio::test]
async fn test_low_stock_uses_default_threshold() {
    let app = app();
    let store_id = create_store(&app, "Stock").await;
    for (sku, quantity) in [("q0", 0), ("q5", 5), ("q10", 10), ("q11", 11)] {
        create_product(&app, &store_id, sku, 100, quantity).await;
    }

    let (status, body) = send(&app, "GET", "/analytics/low-stock", None).await;
    assert_eq!(status, StatusCode::OK);
    let skus: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["sku"].as_str().unwrap())
        .collect();
    assert_eq!(skus, vec!["q10", "q5", "q0"]);
    assert_eq!(body["pagination"]["total"], json!(3));

    let (_, body) = send(&app, "GET", "/analytics/low-stock?threshold=0", None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_list_page_far_past_the_end_is_empty() {
    let app = app();
    let store_id = create_store(&app, "Deep").await;
    create_product(&app, &store_id, "deep-1", 100, 1).await;

    for uri in [
        "/products?page=18446744073709551615&limit=100",
        "/stores?page=18446744073709551615&limit=100",
    ] {
        let (status, body) = send(&app, "GET", uri, None).await;

        assert_eq!(status, StatusCode::OK, "{}", uri);
        assert_eq!(body["data"], json!([]));
        assert_eq!(body["pagination"]["page"], json!(u64::MAX));
        assert_eq!(body["pagination"]["total"], json!(1));
    }
}

#[tokio::test]
async fn test_create_product_rejects_price_above_maximum() {
    let app = app();
    let store_id = create_store(&app, "Pricey").await;

    let (status, body) = send(
        &app,
        "POST",
        "/products",
        Some(json!({
            "sku": "too-much",
            "name": "Widget",
            "category": "tools",
            "price": 9_000_000_000_000_000_000_i64,
            "quantity": 2,
            "storeId": store_id,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["errors"]["price"].is_string());

    let product = create_product(&app, &store_id, "max", MAX_PRICE, 1).await;
    let uri = format!("/products/{}", product["id"].as_str().unwrap());
    let (status, body) = send(&app, "PUT", &uri, Some(json!({ "price": MAX_PRICE + 1 }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["errors"]["price"].is_string());
}

#[tokio::test]
async fn test_inventory_value_at_maximum_price() {
    let app = app();
    let store_id = create_store(&app, "Vault").await;
    create_product(&app, &store_id, "gold-1", MAX_PRICE, 2_000_000_000).await;
    create_product(&app, &store_id, "gold-2", MAX_PRICE, 2_000_000_000).await;

    let uri = format!("/analytics/stores/{}/inventory-value", store_id);
    let (status, body) = send(&app, "GET", &uri, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_money_eq(
        body["data"]["totalValue"].as_f64().unwrap(),
        4_000_000_000_000_000.0,
        "totalValue",
    );
}

#[tokio::test]
async fn test_list_products_filters_by_stock_range() {
    let app = app();
    let store_id = create_store(&app, "Shelves").await;
    for (sku, quantity) in [("s2", 2), ("s5", 5), ("s8", 8), ("s11", 11)] {
        create_product(&app, &store_id, sku, 100, quantity).await;
    }

    let (status, body) = send(&app, "GET", "/products?minStock=5&maxStock=8", None).await;

    assert_eq!(status, StatusCode::OK);
    let mut skus: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["sku"].as_str().unwrap())
        .collect();
    skus.sort_unstable();
    assert_eq!(skus, vec!["s5", "s8"]);
    assert_eq!(body["pagination"]["total"], json!(2));

    let (_, body) = send(&app, "GET", "/products?minStock=11", None).await;
    assert_eq!(body["pagination"]["total"], json!(1));
}

#[tokio::test]
async fn test_list_products_blank_category_matches_everything() {
    let app = app();
    let store_id = create_store(&app, "Mixed").await;
    create_product(&app, &store_id, "m-1", 100, 1).await;
    create_product(&app, &store_id, "m-2", 100, 1).await;

    let (status, body) = send(&app, "GET", "/products?category=", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pagination"]["total"], json!(2));
}
