#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.name_empty")]
    NameEmpty,
    #[error("product.free_product: a product may not have zero price")]
    FreeProduct,
    #[error("product.not_found: no product with id {0}")]
    NotFound(i32),
    #[error("product.empty_store: no products in store")]
    EmptyStore,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
