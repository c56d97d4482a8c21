use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Option<Product>, ProductError> {
        self.logger
            .info(&format!("Saving product: {}", params.id));

        // Full replace keyed by id; an unknown id is inserted.
        let product = Product::from_repository(
            params.id,
            params.name,
            params.sell_price,
            params.purchase_price,
        );

        let saved = self.repository.save(&product).await?;

        if saved.is_none() {
            self.logger
                .warn(&format!("Product {} was not persisted", params.id));
        }
        Ok(saved)
    }
}
