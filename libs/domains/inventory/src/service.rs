use axum_helpers::PaginationMeta;
use std::sync::Arc;
use uuid::Uuid;

use crate::error::{InventoryError, InventoryResult};
use crate::models::{
    CategoryProductCount, CreateProduct, CreateStore, InventoryValue, Pagination, Product,
    ProductFilter, ProductsStoresSummary, Store, StoreProductCount, UpdateProduct, UpdateStore,
    to_major_units,
};
use crate::repository::{ProductRepository, StoreRepository};

pub const DEFAULT_LOW_STOCK_THRESHOLD: i32 = 10;

/// One page of results plus its pagination block
pub type Page<T> = (Vec<T>, PaginationMeta);

/// Service layer for Store business logic
pub struct StoreService<S: StoreRepository> {
    stores: Arc<S>,
}

impl<S: StoreRepository> StoreService<S> {
    pub fn new(stores: S) -> Self {
        Self {
            stores: Arc::new(stores),
        }
    }

    pub async fn create_store(&self, input: CreateStore) -> InventoryResult<Store> {
        let store = self.stores.create(input).await?;
        tracing::info!(store_id = %store.id, "Created store");
        Ok(store)
    }

    pub async fn get_store(&self, id: Uuid) -> InventoryResult<Store> {
        self.stores
            .get_by_id(id)
            .await?
            .ok_or(InventoryError::StoreNotFound(id))
    }

    pub async fn list_stores(&self, pagination: Pagination) -> InventoryResult<Page<Store>> {
        let (stores, total) =
            tokio::try_join!(self.stores.list(pagination), self.stores.count())?;

        Ok((
            stores,
            PaginationMeta::new(pagination.page, pagination.limit, total),
        ))
    }

    pub async fn update_store(&self, id: Uuid, input: UpdateStore) -> InventoryResult<Store> {
        let store = self.stores.update(id, input).await?;
        tracing::info!(store_id = %id, "Updated store");
        Ok(store)
    }

    /// Hard delete; the store's products go with it
    pub async fn delete_store(&self, id: Uuid) -> InventoryResult<()> {
        if !self.stores.delete(id).await? {
            return Err(InventoryError::StoreNotFound(id));
        }
        tracing::info!(store_id = %id, "Deleted store");
        Ok(())
    }
}

/// Service layer for Product business logic
///
/// Enforces what the handlers cannot see: the referenced store must exist and
/// SKUs are unique across all stores.
pub struct ProductService<P: ProductRepository, S: StoreRepository> {
    products: Arc<P>,
    stores: Arc<S>,
}

impl<P: ProductRepository, S: StoreRepository> ProductService<P, S> {
    pub fn new(products: P, stores: S) -> Self {
        Self {
            products: Arc::new(products),
            stores: Arc::new(stores),
        }
    }

    async fn ensure_store_exists(&self, store_id: Uuid) -> InventoryResult<()> {
        match self.stores.get_by_id(store_id).await? {
            Some(_) => Ok(()),
            None => Err(InventoryError::StoreNotFound(store_id)),
        }
    }

    async fn ensure_sku_available(&self, sku: &str, owner: Option<Uuid>) -> InventoryResult<()> {
        match self.products.get_by_sku(sku).await? {
            Some(existing) if Some(existing.id) != owner => {
                tracing::warn!(sku = %sku, "Rejected duplicate SKU");
                Err(InventoryError::DuplicateSku(sku.to_string()))
            }
            _ => Ok(()),
        }
    }

    pub async fn create_product(&self, input: CreateProduct) -> InventoryResult<Product> {
        self.ensure_store_exists(input.store_id).await?;
        self.ensure_sku_available(&input.sku, None).await?;

        let product = self.products.create(input).await?;
        tracing::info!(
            product_id = %product.id,
            store_id = %product.store_id,
            sku = %product.sku,
            "Created product"
        );
        Ok(product)
    }

    pub async fn get_product(&self, id: Uuid) -> InventoryResult<Product> {
        self.products
            .get_by_id(id)
            .await?
            .ok_or(InventoryError::ProductNotFound(id))
    }

    pub async fn list_products(
        &self,
        filter: ProductFilter,
        pagination: Pagination,
    ) -> InventoryResult<Page<Product>> {
        let (products, total) = tokio::try_join!(
            self.products.list(&filter, pagination),
            self.products.count(&filter)
        )?;

        Ok((
            products,
            PaginationMeta::new(pagination.page, pagination.limit, total),
        ))
    }

    /// Partial update. SKU uniqueness and store existence are only re-checked
    /// when the patch actually changes them.
    pub async fn update_product(
        &self,
        id: Uuid,
        input: UpdateProduct,
    ) -> InventoryResult<Product> {
        let current = self.get_product(id).await?;

        if let Some(ref sku) = input.sku
            && sku != &current.sku
        {
            self.ensure_sku_available(sku, Some(id)).await?;
        }

        if let Some(store_id) = input.store_id
            && store_id != current.store_id
        {
            self.ensure_store_exists(store_id).await?;
        }

        let product = self.products.update(id, input).await?;
        tracing::info!(
            product_id = %id,
            store_id = %product.store_id,
            sku = %product.sku,
            "Updated product"
        );
        Ok(product)
    }

    pub async fn delete_product(&self, id: Uuid) -> InventoryResult<()> {
        if !self.products.delete(id).await? {
            return Err(InventoryError::ProductNotFound(id));
        }
        tracing::info!(product_id = %id, "Deleted product");
        Ok(())
    }
}

/// Aggregate reports, computed on every call
pub struct AnalyticsService<P: ProductRepository, S: StoreRepository> {
    products: Arc<P>,
    stores: Arc<S>,
    low_stock_threshold: i32,
}

impl<P: ProductRepository, S: StoreRepository> AnalyticsService<P, S> {
    pub fn new(products: P, stores: S) -> Self {
        Self {
            products: Arc::new(products),
            stores: Arc::new(stores),
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }

    /// Threshold used by [`Self::low_stock`] when the caller gives none
    pub fn with_low_stock_threshold(mut self, threshold: i32) -> Self {
        self.low_stock_threshold = threshold;
        self
    }

    async fn ensure_store_exists(&self, store_id: Uuid) -> InventoryResult<()> {
        match self.stores.get_by_id(store_id).await? {
            Some(_) => Ok(()),
            None => Err(InventoryError::StoreNotFound(store_id)),
        }
    }

    pub async fn products_stores_summary(&self) -> InventoryResult<ProductsStoresSummary> {
        let filter = ProductFilter::default();
        let (product_count, store_count) =
            tokio::try_join!(self.products.count(&filter), self.stores.count())?;

        Ok(ProductsStoresSummary::new(product_count, store_count))
    }

    pub async fn products_by_store(&self) -> InventoryResult<Vec<StoreProductCount>> {
        self.products.count_by_store().await
    }

    pub async fn products_by_category(
        &self,
        store_id: Uuid,
    ) -> InventoryResult<Vec<CategoryProductCount>> {
        self.ensure_store_exists(store_id).await?;
        self.products.count_by_category(store_id).await
    }

    pub async fn inventory_value(&self, store_id: Uuid) -> InventoryResult<InventoryValue> {
        self.ensure_store_exists(store_id).await?;
        let total = self.products.inventory_value(store_id).await?;

        Ok(InventoryValue {
            store_id,
            total_value: to_major_units(total),
        })
    }

    pub async fn low_stock(&self, threshold: Option<i32>) -> InventoryResult<Vec<Product>> {
        let threshold = threshold.unwrap_or(self.low_stock_threshold);
        tracing::debug!(threshold, "Low-stock report");
        self.products.low_stock(threshold).await
    }
}
