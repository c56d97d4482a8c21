use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::margin::ProductMargin;

#[async_trait]
pub trait ComputeMarginsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<ProductMargin>, ProductError>;
}
