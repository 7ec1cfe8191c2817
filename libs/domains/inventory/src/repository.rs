use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{InventoryError, InventoryResult};
use crate::models::{
    CategoryProductCount, CreateProduct, CreateStore, Pagination, Product, ProductFilter, Store,
    StoreProductCount, UpdateProduct, UpdateStore,
};

/// Repository trait for Store persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StoreRepository: Send + Sync {
    async fn create(&self, input: CreateStore) -> InventoryResult<Store>;

    async fn get_by_id(&self, id: Uuid) -> InventoryResult<Option<Store>>;

    /// Newest first
    async fn list(&self, pagination: Pagination) -> InventoryResult<Vec<Store>>;

    async fn count(&self) -> InventoryResult<u64>;

    /// Fails with `StoreNotFound` for an unknown id
    async fn update(&self, id: Uuid, input: UpdateStore) -> InventoryResult<Store>;

    /// Deletes the store and its products; `false` when nothing was deleted
    async fn delete(&self, id: Uuid) -> InventoryResult<bool>;
}

/// Repository trait for Product persistence and the aggregate queries over it
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn create(&self, input: CreateProduct) -> InventoryResult<Product>;

    /// Includes the owning store
    async fn get_by_id(&self, id: Uuid) -> InventoryResult<Option<Product>>;

    async fn get_by_sku(&self, sku: &str) -> InventoryResult<Option<Product>>;

    /// Newest first, owning store included
    async fn list(
        &self,
        filter: &ProductFilter,
        pagination: Pagination,
    ) -> InventoryResult<Vec<Product>>;

    async fn count(&self, filter: &ProductFilter) -> InventoryResult<u64>;

    /// Fails with `ProductNotFound` for an unknown id
    async fn update(&self, id: Uuid, input: UpdateProduct) -> InventoryResult<Product>;

    async fn delete(&self, id: Uuid) -> InventoryResult<bool>;

    async fn count_by_store(&self) -> InventoryResult<Vec<StoreProductCount>>;

    async fn count_by_category(&self, store_id: Uuid)
    -> InventoryResult<Vec<CategoryProductCount>>;

    /// Σ price × quantity for one store, minor units, clamped to `i64::MAX`
    async fn inventory_value(&self, store_id: Uuid) -> InventoryResult<i64>;

    /// Products with `quantity <= threshold`, highest quantity first
    async fn low_stock(&self, threshold: i32) -> InventoryResult<Vec<Product>>;
}

#[derive(Debug, Default)]
struct InventoryState {
    stores: HashMap<Uuid, Store>,
    products: HashMap<Uuid, Product>,
}

impl InventoryState {
    fn with_store(&self, mut product: Product) -> Product {
        product.store = self.stores.get(&product.store_id).cloned();
        product
    }
}

/// Inventory totals clamp to `i64::MAX` instead of overflowing.
fn saturate_value(total: i128) -> i64 {
    i64::try_from(total).unwrap_or(i64::MAX)
}

fn page<T>(items: Vec<T>, pagination: Pagination) -> Vec<T> {
    items
        .into_iter()
        .skip(usize::try_from(pagination.offset()).unwrap_or(usize::MAX))
        .take(usize::try_from(pagination.limit).unwrap_or(usize::MAX))
        .collect()
}

/// In-memory implementation of StoreRepository (for development/testing)
///
/// Shares its state with the [`InMemoryProductRepository`] built alongside it
/// by [`in_memory_repositories`], so deletes cascade and store references are
/// checked the way the database does.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStoreRepository {
    state: Arc<RwLock<InventoryState>>,
}

/// In-memory implementation of ProductRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    state: Arc<RwLock<InventoryState>>,
}

/// A store and a product repository over the same in-memory tables.
pub fn in_memory_repositories() -> (InMemoryStoreRepository, InMemoryProductRepository) {
    let state = Arc::new(RwLock::new(InventoryState::default()));
    (
        InMemoryStoreRepository {
            state: state.clone(),
        },
        InMemoryProductRepository { state },
    )
}

impl InMemoryStoreRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StoreRepository for InMemoryStoreRepository {
    async fn create(&self, input: CreateStore) -> InventoryResult<Store> {
        let mut state = self.state.write().await;

        let store = Store::new(input);
        state.stores.insert(store.id, store.clone());
        Ok(store)
    }

    async fn get_by_id(&self, id: Uuid) -> InventoryResult<Option<Store>> {
        let state = self.state.read().await;
        Ok(state.stores.get(&id).cloned())
    }

    async fn list(&self, pagination: Pagination) -> InventoryResult<Vec<Store>> {
        let state = self.state.read().await;

        let mut stores: Vec<Store> = state.stores.values().cloned().collect();
        stores.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));

        Ok(page(stores, pagination))
    }

    async fn count(&self) -> InventoryResult<u64> {
        let state = self.state.read().await;
        Ok(state.stores.len() as u64)
    }

    async fn update(&self, id: Uuid, input: UpdateStore) -> InventoryResult<Store> {
        let mut state = self.state.write().await;

        let store = state
            .stores
            .get_mut(&id)
            .ok_or(InventoryError::StoreNotFound(id))?;
        store.apply_update(input);
        let updated = store.clone();
        Ok(updated)
    }

    async fn delete(&self, id: Uuid) -> InventoryResult<bool> {
        let mut state = self.state.write().await;

        if state.stores.remove(&id).is_none() {
            return Ok(false);
        }
        state.products.retain(|_, p| p.store_id != id);
        Ok(true)
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, input: CreateProduct) -> InventoryResult<Product> {
        let mut state = self.state.write().await;

        if !state.stores.contains_key(&input.store_id) {
            return Err(InventoryError::StoreNotFound(input.store_id));
        }
        if state.products.values().any(|p| p.sku == input.sku) {
            return Err(InventoryError::DuplicateSku(input.sku));
        }

        let product = Product::new(input);
        state.products.insert(product.id, product.clone());
        Ok(product)
    }

    async fn get_by_id(&self, id: Uuid) -> InventoryResult<Option<Product>> {
        let state = self.state.read().await;
        Ok(state
            .products
            .get(&id)
            .cloned()
            .map(|p| state.with_store(p)))
    }

    async fn get_by_sku(&self, sku: &str) -> InventoryResult<Option<Product>> {
        let state = self.state.read().await;
        Ok(state.products.values().find(|p| p.sku == sku).cloned())
    }

    async fn list(
        &self,
        filter: &ProductFilter,
        pagination: Pagination,
    ) -> InventoryResult<Vec<Product>> {
        let state = self.state.read().await;

        let mut products: Vec<Product> = state
            .products
            .values()
            .filter(|p| p.matches(filter))
            .cloned()
            .collect();
        products.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));

        Ok(page(products, pagination)
            .into_iter()
            .map(|p| state.with_store(p))
            .collect())
    }

    async fn count(&self, filter: &ProductFilter) -> InventoryResult<u64> {
        let state = self.state.read().await;
        Ok(state.products.values().filter(|p| p.matches(filter)).count() as u64)
    }

    async fn update(&self, id: Uuid, input: UpdateProduct) -> InventoryResult<Product> {
        let mut state = self.state.write().await;

        if !state.products.contains_key(&id) {
            return Err(InventoryError::ProductNotFound(id));
        }
        if let Some(store_id) = input.store_id
            && !state.stores.contains_key(&store_id)
        {
            return Err(InventoryError::StoreNotFound(store_id));
        }
        if let Some(ref sku) = input.sku
            && state.products.values().any(|p| p.id != id && &p.sku == sku)
        {
            return Err(InventoryError::DuplicateSku(sku.clone()));
        }

        let product = state
            .products
            .get_mut(&id)
            .ok_or(InventoryError::ProductNotFound(id))?;
        product.apply_update(input);
        let mut updated = product.clone();
        updated.store = None;
        Ok(updated)
    }

    async fn delete(&self, id: Uuid) -> InventoryResult<bool> {
        let mut state = self.state.write().await;

        Ok(state.products.remove(&id).is_some())
    }

    async fn count_by_store(&self) -> InventoryResult<Vec<StoreProductCount>> {
        let state = self.state.read().await;

        let mut counts: HashMap<Uuid, u64> = HashMap::new();
        for product in state.products.values() {
            *counts.entry(product.store_id).or_default() += 1;
        }

        let mut result: Vec<StoreProductCount> = counts
            .into_iter()
            .map(|(store_id, products)| StoreProductCount { store_id, products })
            .collect();
        result.sort_by(|a, b| b.products.cmp(&a.products).then(a.store_id.cmp(&b.store_id)));

        Ok(result)
    }

    async fn count_by_category(
        &self,
        store_id: Uuid,
    ) -> InventoryResult<Vec<CategoryProductCount>> {
        let state = self.state.read().await;

        let mut counts: HashMap<&str, u64> = HashMap::new();
        for product in state.products.values().filter(|p| p.store_id == store_id) {
            *counts.entry(product.category.as_str()).or_default() += 1;
        }

        let mut result: Vec<CategoryProductCount> = counts
            .into_iter()
            .map(|(category, products)| CategoryProductCount {
                category: category.to_string(),
                products,
            })
            .collect();
        result.sort_by(|a, b| a.category.cmp(&b.category));

        Ok(result)
    }

    async fn inventory_value(&self, store_id: Uuid) -> InventoryResult<i64> {
        let state = self.state.read().await;
        let total: i128 = state
            .products
            .values()
            .filter(|p| p.store_id == store_id)
            .map(|p| i128::from(p.price) * i128::from(p.quantity))
            .sum();
        Ok(saturate_value(total))
    }

    async fn low_stock(&self, threshold: i32) -> InventoryResult<Vec<Product>> {
        let state = self.state.read().await;

        let mut products: Vec<Product> = state
            .products
            .values()
            .filter(|p| p.quantity <= threshold)
            .cloned()
            .collect();
        products.sort_by(|a, b| b.quantity.cmp(&a.quantity).then(a.sku.cmp(&b.sku)));

        Ok(products.into_iter().map(|p| state.with_store(p)).collect())
    }
}
