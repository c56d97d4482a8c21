use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::margin::{ProductMargin, compute_margins};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::compute_margins::ComputeMarginsUseCase;

pub struct ComputeMarginsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ComputeMarginsUseCase for ComputeMarginsUseCaseImpl {
    async fn execute(&self) -> Result<Vec<ProductMargin>, ProductError> {
        self.logger.info("Computing product margins");

        let products = self.repository.get_all().await?;
        let margins = compute_margins(&products)
            .inspect_err(|e| self.logger.warn(&format!("Margin report unavailable: {}", e)))?;

        self.logger
            .debug(&format!("Computed margins for {} products", margins.len()));
        Ok(margins)
    }
}
