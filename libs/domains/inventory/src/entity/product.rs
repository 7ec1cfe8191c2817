use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub sku: String,
    pub name: String,
    pub category: String,
    /// Minor units
    pub price: i64,
    pub quantity: i32,
    pub store_id: Uuid,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::store::Entity",
        from = "Column::StoreId",
        to = "super::store::Column::Id",
        on_delete = "Cascade"
    )]
    Store,
}

impl Related<super::store::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Store.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Domain product with its owning store, as returned by joined lookups.
    pub fn into_product(self, store: Option<super::store::Model>) -> crate::models::Product {
        crate::models::Product {
            id: self.id,
            sku: self.sku,
            name: self.name,
            category: self.category,
            price: self.price,
            quantity: self.quantity,
            store_id: self.store_id,
            description: self.description,
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
            store: store.map(Into::into),
        }
    }
}

impl From<Model> for crate::models::Product {
    fn from(model: Model) -> Self {
        model.into_product(None)
    }
}

impl From<crate::models::Product> for ActiveModel {
    fn from(product: crate::models::Product) -> Self {
        ActiveModel {
            id: Set(product.id),
            sku: Set(product.sku),
            name: Set(product.name),
            category: Set(product.category),
            price: Set(product.price),
            quantity: Set(product.quantity),
            store_id: Set(product.store_id),
            description: Set(product.description),
            created_at: Set(product.created_at.into()),
            updated_at: Set(product.updated_at.into()),
        }
    }
}
