use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProduct, NewProductProps, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Option<Product>, ProductError> {
        self.logger
            .info(&format!("Creating product: {}", params.name));

        let product = NewProduct::new(NewProductProps {
            name: params.name,
            sell_price: params.sell_price,
            purchase_price: params.purchase_price,
        })
        .inspect_err(|e| self.logger.warn(&format!("Rejected product: {}", e)))?;

        let created = self.repository.insert(&product).await?;

        match &created {
            Some(stored) => self
                .logger
                .info(&format!("Product created with id: {}", stored.id)),
            None => self
                .logger
                .warn(&format!("Product {} was not persisted", product.name)),
        }
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use mockall::mock;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn get_all_ordered_by_name(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn get_by_id(&self, id: i32) -> Result<Product, RepositoryError>;
            async fn insert(&self, product: &NewProduct) -> Result<Option<Product>, RepositoryError>;
            async fn save(&self, product: &Product) -> Result<Option<Product>, RepositoryError>;
            async fn delete(&self, id: i32) -> Result<(), RepositoryError>;
            async fn get_above_price(&self, threshold: i32) -> Result<Vec<Product>, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn params(name: &str, sell_price: i32, purchase_price: i32) -> CreateProductParams {
        CreateProductParams {
            name: name.to_string(),
            sell_price,
            purchase_price,
        }
    }

    #[tokio::test]
    async fn should_create_product_when_price_is_not_zero() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_insert()
            .withf(|p| p.name == "Laptop" && p.sell_price == 1000 && p.purchase_price == 700)
            .times(1)
            .returning(|p| Ok(Some(p.clone().with_id(1))));

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("Laptop", 1000, 700)).await;

        let product = result.unwrap().unwrap();
        assert_eq!(product.id, 1);
        assert_eq!(product.name, "Laptop");
        assert_eq!(product.sell_price, 1000);
        assert_eq!(product.purchase_price, 700);
    }

    #[tokio::test]
    async fn should_reject_product_when_sell_price_is_zero() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_insert().never();

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("Free sample", 0, 15)).await;

        assert!(matches!(result.unwrap_err(), ProductError::FreeProduct));
    }

    #[tokio::test]
    async fn should_reject_product_when_name_is_empty() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_insert().never();

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("", 10, 5)).await;

        assert!(matches!(result.unwrap_err(), ProductError::NameEmpty));
    }

    #[tokio::test]
    async fn should_return_none_when_repository_persists_nothing() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_insert().returning(|_| Ok(None));

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("Keyboard", 80, 35)).await;

        assert!(result.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_propagate_repository_error_when_insert_fails() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_insert()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("Monitor", 250, 180)).await;

        assert!(matches!(
            result.unwrap_err(),
            ProductError::Repository(RepositoryError::DatabaseError)
        ));
    }
}
