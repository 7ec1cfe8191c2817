use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, DbBackend, EntityTrait,
    FromQueryResult, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Statement,
};
use uuid::Uuid;

use crate::{
    entity::{product, store},
    error::{InventoryError, InventoryResult},
    models::{
        CategoryProductCount, CreateProduct, CreateStore, Pagination, Product, ProductFilter,
        Store, StoreProductCount, UpdateProduct, UpdateStore,
    },
    repository::{ProductRepository, StoreRepository},
};

#[derive(Clone)]
pub struct PgStoreRepository {
    db: DatabaseConnection,
}

impl PgStoreRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StoreRepository for PgStoreRepository {
    async fn create(&self, input: CreateStore) -> InventoryResult<Store> {
        let active_model: store::ActiveModel = Store::new(input).into();
        let model = active_model.insert(&self.db).await?;
        Ok(model.into())
    }

    async fn get_by_id(&self, id: Uuid) -> InventoryResult<Option<Store>> {
        let model = store::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn list(&self, pagination: Pagination) -> InventoryResult<Vec<Store>> {
        let models = store::Entity::find()
            .order_by_desc(store::Column::CreatedAt)
            .order_by_desc(store::Column::Id)
            .limit(pagination.limit)
            .offset(pagination.offset())
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn count(&self) -> InventoryResult<u64> {
        Ok(store::Entity::find().count(&self.db).await?)
    }

    async fn update(&self, id: Uuid, input: UpdateStore) -> InventoryResult<Store> {
        let mut current: Store = store::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(InventoryError::StoreNotFound(id))?
            .into();

        current.apply_update(input);

        let active_model: store::ActiveModel = current.into();
        let model = active_model.update(&self.db).await?;
        Ok(model.into())
    }

    async fn delete(&self, id: Uuid) -> InventoryResult<bool> {
        // products go with it through ON DELETE CASCADE
        let result = store::Entity::delete_by_id(id).exec(&self.db).await?;

        Ok(result.rows_affected > 0)
    }
}

#[derive(Clone)]
pub struct PgProductRepository {
    db: DatabaseConnection,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn product_condition(filter: &ProductFilter) -> Condition {
    Condition::all()
        .add_option(filter.store_id.map(|id| product::Column::StoreId.eq(id)))
        .add_option(
            filter
                .category
                .as_ref()
                .map(|c| product::Column::Category.eq(c.as_str())),
        )
        .add_option(filter.min_price.map(|v| product::Column::Price.gte(v)))
        .add_option(filter.max_price.map(|v| product::Column::Price.lte(v)))
        .add_option(filter.min_stock.map(|v| product::Column::Quantity.gte(v)))
        .add_option(filter.max_stock.map(|v| product::Column::Quantity.lte(v)))
}

#[derive(Debug, FromQueryResult)]
struct StoreCountRow {
    store_id: Uuid,
    products: i64,
}

#[derive(Debug, FromQueryResult)]
struct CategoryCountRow {
    category: String,
    products: i64,
}

#[derive(Debug, FromQueryResult)]
struct InventoryValueRow {
    total_value: i64,
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn create(&self, input: CreateProduct) -> InventoryResult<Product> {
        let sku = input.sku.clone();
        let store_id = input.store_id;

        let active_model: product::ActiveModel = Product::new(input).into();
        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|e| InventoryError::from_product_write(e, &sku, store_id))?;
        Ok(model.into())
    }

    async fn get_by_id(&self, id: Uuid) -> InventoryResult<Option<Product>> {
        let row = product::Entity::find_by_id(id)
            .find_also_related(store::Entity)
            .one(&self.db)
            .await?;

        Ok(row.map(|(product, store)| product.into_product(store)))
    }

    async fn get_by_sku(&self, sku: &str) -> InventoryResult<Option<Product>> {
        let model = product::Entity::find()
            .filter(product::Column::Sku.eq(sku))
            .one(&self.db)
            .await?;

        Ok(model.map(Into::into))
    }

    async fn list(
        &self,
        filter: &ProductFilter,
        pagination: Pagination,
    ) -> InventoryResult<Vec<Product>> {
        let rows = product::Entity::find()
            .filter(product_condition(filter))
            .find_also_related(store::Entity)
            .order_by_desc(product::Column::CreatedAt)
            .order_by_desc(product::Column::Id)
            .limit(pagination.limit)
            .offset(pagination.offset())
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(product, store)| product.into_product(store))
            .collect())
    }

    async fn count(&self, filter: &ProductFilter) -> InventoryResult<u64> {
        Ok(product::Entity::find()
            .filter(product_condition(filter))
            .count(&self.db)
            .await?)
    }

    async fn update(&self, id: Uuid, input: UpdateProduct) -> InventoryResult<Product> {
        let mut current: Product = product::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(InventoryError::ProductNotFound(id))?
            .into();

        current.apply_update(input);

        let sku = current.sku.clone();
        let store_id = current.store_id;

        let active_model: product::ActiveModel = current.into();
        let model = active_model
            .update(&self.db)
            .await
            .map_err(|e| InventoryError::from_product_write(e, &sku, store_id))?;
        Ok(model.into())
    }

    async fn delete(&self, id: Uuid) -> InventoryResult<bool> {
        let result = product::Entity::delete_by_id(id).exec(&self.db).await?;

        Ok(result.rows_affected > 0)
    }

    async fn count_by_store(&self) -> InventoryResult<Vec<StoreProductCount>> {
        let sql = r#"
            SELECT store_id, COUNT(*)::bigint AS products
            FROM products
            GROUP BY store_id
            ORDER BY products DESC, store_id
        "#;

        let stmt = Statement::from_string(DbBackend::Postgres, sql);
        let rows = StoreCountRow::find_by_statement(stmt).all(&self.db).await?;

        Ok(rows
            .into_iter()
            .map(|r| StoreProductCount {
                store_id: r.store_id,
                products: r.products.max(0) as u64,
            })
            .collect())
    }

    async fn count_by_category(
        &self,
        store_id: Uuid,
    ) -> InventoryResult<Vec<CategoryProductCount>> {
        let sql = r#"
            SELECT category, COUNT(*)::bigint AS products
            FROM products
            WHERE store_id = $1
            GROUP BY category
            ORDER BY category
        "#;

        let stmt = Statement::from_sql_and_values(DbBackend::Postgres, sql, [store_id.into()]);
        let rows = CategoryCountRow::find_by_statement(stmt)
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|r| CategoryProductCount {
                category: r.category,
                products: r.products.max(0) as u64,
            })
            .collect())
    }

    async fn inventory_value(&self, store_id: Uuid) -> InventoryResult<i64> {
        let sql = r#"
            SELECT LEAST(
                COALESCE(SUM(price::numeric * quantity), 0),
                9223372036854775807
            )::bigint AS total_value
            FROM products
            WHERE store_id = $1
        "#;

        let stmt = Statement::from_sql_and_values(DbBackend::Postgres, sql, [store_id.into()]);
        let row = InventoryValueRow::find_by_statement(stmt)
            .one(&self.db)
            .await?;

        Ok(row.map(|r| r.total_value).unwrap_or(0))
    }

    async fn low_stock(&self, threshold: i32) -> InventoryResult<Vec<Product>> {
        let rows = product::Entity::find()
            .filter(product::Column::Quantity.lte(threshold))
            .find_also_related(store::Entity)
            .order_by_desc(product::Column::Quantity)
            .order_by_asc(product::Column::Sku)
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(product, store)| product.into_product(store))
            .collect())
    }
}
