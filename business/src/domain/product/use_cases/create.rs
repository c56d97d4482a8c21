use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

pub struct CreateProductParams {
    pub name: String,
    pub sell_price: i32,
    pub purchase_price: i32,
}

#[async_trait]
pub trait CreateProductUseCase: Send + Sync {
    /// Returns `None` when the repository persisted nothing.
    async fn execute(&self, params: CreateProductParams) -> Result<Option<Product>, ProductError>;
}
