//! Demo data for an empty database.

use crate::error::InventoryResult;
use crate::models::{CreateProduct, CreateStore};
use crate::repository::{ProductRepository, StoreRepository};

pub const STORES: usize = 10;
pub const PRODUCTS_PER_STORE: usize = 10;

const STORE_PREFIXES: [&str; 5] = ["North", "South", "East", "West", "Central"];
const STORE_KINDS: [&str; 2] = ["Market", "Outlet"];
const CATEGORIES: [&str; 6] = ["electronics", "garden", "grocery", "home", "sports", "toys"];
const ADJECTIVES: [&str; 5] = ["Compact", "Deluxe", "Rugged", "Classic", "Smart"];
const NOUNS: [&str; 4] = ["Lamp", "Kettle", "Backpack", "Speaker"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub stores: usize,
    pub products: usize,
}

fn store_input(index: usize) -> CreateStore {
    let prefix = STORE_PREFIXES[index % STORE_PREFIXES.len()];
    let kind = STORE_KINDS[(index / STORE_PREFIXES.len()) % STORE_KINDS.len()];
    CreateStore {
        name: format!("{} {}", prefix, kind),
        description: Some(format!(
            "{} {} serving the {} district",
            prefix,
            kind.to_lowercase(),
            prefix.to_lowercase()
        )),
    }
}

fn product_input(store_index: usize, index: usize, store_id: uuid::Uuid) -> CreateProduct {
    let n = store_index * PRODUCTS_PER_STORE + index;
    let adjective = ADJECTIVES[n % ADJECTIVES.len()];
    let noun = NOUNS[(n / ADJECTIVES.len()) % NOUNS.len()];

    CreateProduct {
        sku: format!("seed-{:02}-{:02}", store_index, index),
        name: format!("{} {}", adjective, noun),
        category: CATEGORIES[n % CATEGORIES.len()].to_string(),
        // 4.99 ..= 250.98 in cents
        price: 499 + ((n * 7_919) % 24_600) as i64,
        // 0 ..= 99, so some products land in the low-stock report
        quantity: ((n * 37) % 100) as i32,
        store_id,
        description: Some(format!(
            "{} {} from the demo catalogue",
            adjective,
            noun.to_lowercase()
        )),
    }
}

/// Insert [`STORES`] stores with [`PRODUCTS_PER_STORE`] products each, unless
/// there already are stores. Returns `None` when nothing was inserted.
///
/// The generated data is the same on every run.
pub async fn seed_if_empty<S, P>(stores: &S, products: &P) -> InventoryResult<Option<SeedSummary>>
where
    S: StoreRepository,
    P: ProductRepository,
{
    if stores.count().await? > 0 {
        tracing::info!("Stores present, skipping seed");
        return Ok(None);
    }

    let mut summary = SeedSummary {
        stores: 0,
        products: 0,
    };

    for store_index in 0..STORES {
        let store = stores.create(store_input(store_index)).await?;
        summary.stores += 1;

        for index in 0..PRODUCTS_PER_STORE {
            products
                .create(product_input(store_index, index, store.id))
                .await?;
            summary.products += 1;
        }
    }

    tracing::info!(
        stores = summary.stores,
        products = summary.products,
        "Seeded database"
    );
    Ok(Some(summary))
}
