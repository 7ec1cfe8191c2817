use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 10;
/// Highest accepted unit price, minor units (1,000,000.00)
pub const MAX_PRICE: i64 = 100_000_000;

/// SKUs and categories are stored trimmed and lowercased.
pub fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

fn deserialize_normalized<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(|s| normalize(&s))
}

fn deserialize_normalized_opt<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(|s| s.map(|s| normalize(&s)))
}

/// Query filters: a blank value means no filter.
fn deserialize_filter_opt<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_normalized_opt(deserializer).map(|s| s.filter(|s| !s.is_empty()))
}

/// Integer minor units (cents) to a major-unit amount with two decimals.
pub fn to_major_units(minor: i64) -> f64 {
    minor as f64 / 100.0
}

fn default_page() -> u64 {
    DEFAULT_PAGE
}

fn default_limit() -> u64 {
    DEFAULT_LIMIT
}

// ---------------------------------------------------------------------------
// Stores
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Store {
    pub fn new(input: CreateStore) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            name: input.name,
            description: input.description,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply the fields present in `input`.
    pub fn apply_update(&mut self, input: UpdateStore) {
        if let Some(name) = input.name {
            self.name = name;
        }
        if let Some(description) = input.description {
            self.description = Some(description);
        }
        self.updated_at = Utc::now();
    }
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateStore {
    #[validate(length(min = 1, max = 255))]
    #[schema(example = "Downtown")]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStore {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    pub description: Option<String>,
}

// ---------------------------------------------------------------------------
// Products
// ---------------------------------------------------------------------------

/// Product as persisted. `price` is in minor units.
///
/// `store` is filled in by lookups (`get_by_id`, `list`, low-stock report)
/// and left empty on writes.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: Uuid,
    pub sku: String,
    pub name: String,
    pub category: String,
    pub price: i64,
    pub quantity: i32,
    pub store_id: Uuid,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub store: Option<Store>,
}

impl Product {
    pub fn new(input: CreateProduct) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            sku: input.sku,
            name: input.name,
            category: input.category,
            price: input.price,
            quantity: input.quantity,
            store_id: input.store_id,
            description: input.description,
            created_at: now,
            updated_at: now,
            store: None,
        }
    }

    /// Apply the fields present in `input`.
    pub fn apply_update(&mut self, input: UpdateProduct) {
        if let Some(sku) = input.sku {
            self.sku = sku;
        }
        if let Some(name) = input.name {
            self.name = name;
        }
        if let Some(category) = input.category {
            self.category = category;
        }
        if let Some(price) = input.price {
            self.price = price;
        }
        if let Some(quantity) = input.quantity {
            self.quantity = quantity;
        }
        if let Some(store_id) = input.store_id {
            if store_id != self.store_id {
                self.store = None;
            }
            self.store_id = store_id;
        }
        if let Some(description) = input.description {
            self.description = Some(description);
        }
        self.updated_at = Utc::now();
    }

    /// Whether `filter` selects this product.
    pub fn matches(&self, filter: &ProductFilter) -> bool {
        filter.store_id.is_none_or(|id| self.store_id == id)
            && filter.category.as_ref().is_none_or(|c| &self.category == c)
            && filter.min_price.is_none_or(|min| self.price >= min)
            && filter.max_price.is_none_or(|max| self.price <= max)
            && filter.min_stock.is_none_or(|min| self.quantity >= min)
            && filter.max_stock.is_none_or(|max| self.quantity <= max)
    }
}

/// Product as presented over HTTP: price in major units, owning store embedded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: Uuid,
    #[schema(example = "abc-123")]
    pub sku: String,
    pub name: String,
    #[schema(example = "electronics")]
    pub category: String,
    #[schema(example = 19.99)]
    pub price: f64,
    pub quantity: i32,
    pub store_id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store: Option<Store>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            sku: product.sku,
            name: product.name,
            category: product.category,
            price: to_major_units(product.price),
            quantity: product.quantity,
            store_id: product.store_id,
            description: product.description,
            created_at: product.created_at,
            updated_at: product.updated_at,
            store: product.store,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProduct {
    #[serde(deserialize_with = "deserialize_normalized")]
    #[validate(length(min = 1, max = 50))]
    #[schema(example = "ABC-123")]
    pub sku: String,
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[serde(deserialize_with = "deserialize_normalized")]
    #[validate(length(min = 1, max = 100))]
    #[schema(example = "Electronics")]
    pub category: String,
    /// Minor units (cents)
    #[validate(range(min = 1, max = 100000000))]
    #[schema(example = 1999, minimum = 1, maximum = 100000000)]
    pub price: i64,
    #[validate(range(min = 0))]
    pub quantity: i32,
    pub store_id: Uuid,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProduct {
    #[serde(default, deserialize_with = "deserialize_normalized_opt")]
    #[validate(length(min = 1, max = 50))]
    pub sku: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_normalized_opt")]
    #[validate(length(min = 1, max = 100))]
    pub category: Option<String>,
    /// Minor units (cents)
    #[validate(range(min = 1, max = 100000000))]
    #[schema(minimum = 1, maximum = 100000000)]
    pub price: Option<i64>,
    #[validate(range(min = 0))]
    pub quantity: Option<i32>,
    pub store_id: Option<Uuid>,
    pub description: Option<String>,
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

/// Page selection; `offset = (page - 1) * limit`, capped at `i64::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u64,
    pub limit: u64,
}

impl Pagination {
    pub fn new(page: u64, limit: u64) -> Self {
        Self { page, limit }
    }

    pub fn offset(&self) -> u64 {
        self.page
            .saturating_sub(1)
            .saturating_mul(self.limit)
            .min(i64::MAX as u64)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE, DEFAULT_LIMIT)
    }
}

/// Product predicates, combined with AND. Prices are minor units, stock
/// bounds are quantities; every bound is inclusive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    pub category: Option<String>,
    pub store_id: Option<Uuid>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub min_stock: Option<i32>,
    pub max_stock: Option<i32>,
}

#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListStoresQuery {
    /// Page number, starting at 1
    #[serde(default = "default_page")]
    #[validate(range(min = 1))]
    #[param(minimum = 1, default = 1)]
    pub page: u64,
    /// Page size
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 100))]
    #[param(minimum = 1, maximum = 100, default = 10)]
    pub limit: u64,
}

impl ListStoresQuery {
    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.page, self.limit)
    }
}

#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListProductsQuery {
    /// Page number, starting at 1
    #[serde(default = "default_page")]
    #[validate(range(min = 1))]
    #[param(minimum = 1, default = 1)]
    pub page: u64,
    /// Page size
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 100))]
    #[param(minimum = 1, maximum = 100, default = 10)]
    pub limit: u64,
    /// Exact category, matched case-insensitively; blank means any
    #[serde(default, deserialize_with = "deserialize_filter_opt")]
    pub category: Option<String>,
    pub store_id: Option<Uuid>,
    /// Inclusive lower price bound, minor units
    #[validate(range(min = 1))]
    pub min_price: Option<i64>,
    /// Inclusive upper price bound, minor units
    #[validate(range(min = 1))]
    pub max_price: Option<i64>,
    #[validate(range(min = 0))]
    pub min_stock: Option<i32>,
    #[validate(range(min = 0))]
    pub max_stock: Option<i32>,
}

impl ListProductsQuery {
    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.page, self.limit)
    }

    pub fn filter(&self) -> ProductFilter {
        ProductFilter {
            category: self.category.clone(),
            store_id: self.store_id,
            min_price: self.min_price,
            max_price: self.max_price,
            min_stock: self.min_stock,
            max_stock: self.max_stock,
        }
    }
}

// ---------------------------------------------------------------------------
// Analytics
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LowStockQuery {
    /// Report products with quantity at or below this value
    #[validate(range(min = 0))]
    pub threshold: Option<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductsStoresSummary {
    pub product_count: u64,
    pub store_count: u64,
    /// `floor(productCount / storeCount)`, 0 without stores
    pub average_product_count: u64,
}

impl ProductsStoresSummary {
    pub fn new(product_count: u64, store_count: u64) -> Self {
        let average_product_count = product_count.checked_div(store_count).unwrap_or(0);
        Self {
            product_count,
            store_count,
            average_product_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StoreProductCount {
    pub store_id: Uuid,
    pub products: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryProductCount {
    pub category: String,
    pub products: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InventoryValue {
    pub store_id: Uuid,
    /// Σ price × quantity in major units
    #[schema(example = 1234.5)]
    pub total_value: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_price_is_presented_in_major_units() {
        assert_eq!(to_major_units(1999), 19.99);
        assert_eq!(to_major_units(100), 1.0);
        assert_eq!(to_major_units(5), 0.05);
        assert_eq!(to_major_units(0), 0.0);
    }

    #[test]
    fn test_create_product_normalizes_sku_and_category() {
        let input: CreateProduct = serde_json::from_value(json!({
            "sku": "  ABC-123 ",
            "name": "Widget",
            "category": " Electronics",
            "price": 1999,
            "quantity": 5,
            "storeId": Uuid::nil(),
        }))
        .unwrap();

        assert_eq!(input.sku, "abc-123");
        assert_eq!(input.category, "electronics");
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_blank_sku_fails_validation() {
        let input: CreateProduct = serde_json::from_value(json!({
            "sku": "   ",
            "name": "Widget",
            "category": "tools",
            "price": 1,
            "quantity": 0,
            "storeId": Uuid::nil(),
        }))
        .unwrap();

        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("sku"));
    }

    #[test]
    fn test_price_and_quantity_bounds() {
        let input: CreateProduct = serde_json::from_value(json!({
            "sku": "x",
            "name": "Widget",
            "category": "tools",
            "price": 0,
            "quantity": -1,
            "storeId": Uuid::nil(),
        }))
        .unwrap();

        let errors = input.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("price"));
        assert!(fields.contains_key("quantity"));
    }

    #[test]
    fn test_update_product_only_touches_present_fields() {
        let store_id = Uuid::now_v7();
        let mut product = Product::new(CreateProduct {
            sku: "abc".to_string(),
            name: "Widget".to_string(),
            category: "tools".to_string(),
            price: 500,
            quantity: 3,
            store_id,
            description: None,
        });

        let patch: UpdateProduct = serde_json::from_value(json!({ "price": 750, "category": "Garden" }))
            .unwrap();
        product.apply_update(patch);

        assert_eq!(product.price, 750);
        assert_eq!(product.category, "garden");
        assert_eq!(product.sku, "abc");
        assert_eq!(product.quantity, 3);
        assert_eq!(product.store_id, store_id);
    }

    #[test]
    fn test_pagination_offset() {
        assert_eq!(Pagination::new(1, 10).offset(), 0);
        assert_eq!(Pagination::new(3, 10).offset(), 20);
        assert_eq!(Pagination::new(2, 25).offset(), 25);
    }

    #[test]
    fn test_pagination_offset_saturates() {
        assert_eq!(Pagination::new(u64::MAX, 100).offset(), i64::MAX as u64);
        assert_eq!(Pagination::new(u64::MAX, 1).offset(), i64::MAX as u64);
        assert_eq!(Pagination::new(0, 10).offset(), 0);
    }

    #[test]
    fn test_price_upper_bound() {
        let mut input: CreateProduct = serde_json::from_value(json!({
            "sku": "x",
            "name": "Widget",
            "category": "tools",
            "price": MAX_PRICE,
            "quantity": 1,
            "storeId": Uuid::nil(),
        }))
        .unwrap();
        assert!(input.validate().is_ok());

        input.price = MAX_PRICE + 1;
        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("price"));

        let patch = UpdateProduct {
            price: Some(i64::MAX),
            ..Default::default()
        };
        assert!(patch.validate().unwrap_err().field_errors().contains_key("price"));
    }

    #[test]
    fn test_blank_category_filter_is_ignored() {
        let query: ListProductsQuery =
            serde_json::from_value(json!({ "category": "  " })).unwrap();
        assert_eq!(query.filter().category, None);

        let query: ListProductsQuery =
            serde_json::from_value(json!({ "category": " Garden" })).unwrap();
        assert_eq!(query.filter().category.as_deref(), Some("garden"));
    }

    #[test]
    fn test_filter_bounds_are_inclusive() {
        let mut product = Product::new(CreateProduct {
            sku: "a".to_string(),
            name: "A".to_string(),
            category: "tools".to_string(),
            price: 20,
            quantity: 5,
            store_id: Uuid::now_v7(),
            description: None,
        });

        let filter = ProductFilter {
            min_price: Some(20),
            max_price: Some(50),
            ..Default::default()
        };
        assert!(product.matches(&filter));

        product.price = 50;
        assert!(product.matches(&filter));

        product.price = 51;
        assert!(!product.matches(&filter));

        let filter = ProductFilter {
            category: Some("garden".to_string()),
            ..Default::default()
        };
        assert!(!product.matches(&filter));
    }

    #[test]
    fn test_summary_average_is_floored() {
        let summary = ProductsStoresSummary::new(7, 2);
        assert_eq!(summary.average_product_count, 3);

        let summary = ProductsStoresSummary::new(5, 0);
        assert_eq!(summary.average_product_count, 0);
    }

    #[test]
    fn test_query_defaults() {
        let query: ListProductsQuery = serde_json::from_value(json!({})).unwrap();
        assert_eq!(query.page, 1);
        assert_eq!(query.limit, 10);
        assert_eq!(query.filter(), ProductFilter::default());
    }
}
