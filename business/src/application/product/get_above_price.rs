use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_above_price::{
    GetProductsAbovePriceParams, GetProductsAbovePriceUseCase,
};

pub struct GetProductsAbovePriceUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductsAbovePriceUseCase for GetProductsAbovePriceUseCaseImpl {
    async fn execute(
        &self,
        params: GetProductsAbovePriceParams,
    ) -> Result<Vec<Product>, ProductError> {
        self.logger.info(&format!(
            "Fetching products priced above {}",
            params.threshold
        ));
        let products = self.repository.get_above_price(params.threshold).await?;
        self.logger
            .info(&format!("Found {} products", products.len()));
        Ok(products)
    }
}
