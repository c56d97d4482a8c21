use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

pub struct GetProductsAbovePriceParams {
    pub threshold: i32,
}

#[async_trait]
pub trait GetProductsAbovePriceUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetProductsAbovePriceParams,
    ) -> Result<Vec<Product>, ProductError>;
}
