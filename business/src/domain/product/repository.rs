use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{NewProduct, Product};

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products, in no particular order.
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
    /// All products sorted by name, ties broken by id.
    async fn get_all_ordered_by_name(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_id(&self, id: i32) -> Result<Product, RepositoryError>;
    /// Stores a new product and returns it with its assigned id.
    /// `None` means the store reported nothing persisted.
    async fn insert(&self, product: &NewProduct) -> Result<Option<Product>, RepositoryError>;
    /// Inserts or replaces the product with the same id.
    async fn save(&self, product: &Product) -> Result<Option<Product>, RepositoryError>;
    /// Removes the product if present. Deleting an unknown id is not an error.
    async fn delete(&self, id: i32) -> Result<(), RepositoryError>;
    /// Products whose sell price is strictly greater than `threshold`.
    async fn get_above_price(&self, threshold: i32) -> Result<Vec<Product>, RepositoryError>;
}
