use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{NewProduct, Product};
use business::domain::product::repository::ProductRepository;

#[derive(Debug)]
struct Store {
    products: BTreeMap<i32, Product>,
    /// Next id handed out by `insert`. Kept as `i64` so the id space can be
    /// exhausted without wrapping.
    next_id: i64,
}

/// Process-local product store.
///
/// Used when no database is configured, and by tests. Contents are lost on
/// restart.
#[derive(Debug)]
pub struct ProductRepositoryInMemory {
    store: RwLock<Store>,
}

impl ProductRepositoryInMemory {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Store {
                products: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for ProductRepositoryInMemory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryInMemory {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.store.read().await.products.values().cloned().collect())
    }

    async fn get_all_ordered_by_name(&self) -> Result<Vec<Product>, RepositoryError> {
        let mut products = self.get_all().await?;
        // ids are already ascending, so a stable sort keeps ties ordered by id
        products.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(products)
    }

    async fn get_by_id(&self, id: i32) -> Result<Product, RepositoryError> {
        self.store
            .read()
            .await
            .products
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn insert(&self, product: &NewProduct) -> Result<Option<Product>, RepositoryError> {
        let mut store = self.store.write().await;

        let Ok(id) = i32::try_from(store.next_id) else {
            tracing::warn!(target: "persistence", "product id space exhausted");
            return Ok(None);
        };
        store.next_id += 1;

        let stored = product.clone().with_id(id);
        store.products.insert(id, stored.clone());
        Ok(Some(stored))
    }

    async fn save(&self, product: &Product) -> Result<Option<Product>, RepositoryError> {
        let mut store = self.store.write().await;

        let after = i64::from(product.id) + 1;
        if after > store.next_id {
            store.next_id = after;
        }

        store.products.insert(product.id, product.clone());
        Ok(Some(product.clone()))
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        self.store.write().await.products.remove(&id);
        Ok(())
    }

    async fn get_above_price(&self, threshold: i32) -> Result<Vec<Product>, RepositoryError> {
        Ok(self
            .store
            .read()
            .await
            .products
            .values()
            .filter(|p| p.sell_price > threshold)
            .cloned()
            .collect())
    }
}
