use async_trait::async_trait;
use sqlx::PgPool;
use tracing::error;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{NewProduct, Product};
use business::domain::product::repository::ProductRepository;

use super::entity::ProductEntity;

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Raises the id sequence to `$1` unless it is already there. Never moves it
/// backwards.
const ADVANCE_ID_SEQUENCE: &str = r#"SELECT setval(pg_get_serial_sequence('products', 'id')::regclass, $1)
    WHERE $1 > COALESCE(
        pg_sequence_last_value(pg_get_serial_sequence('products', 'id')::regclass),
        0
    )"#;

fn database_error(err: sqlx::Error) -> RepositoryError {
    error!(target: "persistence", "products query failed: {}", err);
    RepositoryError::DatabaseError
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(
            "SELECT id, name, sell_price, purchase_price FROM products",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_all_ordered_by_name(&self) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(
            r#"SELECT id, name, sell_price, purchase_price FROM products ORDER BY name COLLATE "C" ASC, id ASC"#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: i32) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(
            "SELECT id, name, sell_price, purchase_price FROM products WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn insert(&self, product: &NewProduct) -> Result<Option<Product>, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(
            r#"INSERT INTO products (name, sell_price, purchase_price)
            VALUES ($1, $2, $3)
            RETURNING id, name, sell_price, purchase_price"#,
        )
        .bind(&product.name)
        .bind(product.sell_price)
        .bind(product.purchase_price)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn save(&self, product: &Product) -> Result<Option<Product>, RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(database_error)?;

        let entity = sqlx::query_as::<_, ProductEntity>(
            r#"INSERT INTO products (id, name, sell_price, purchase_price)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                sell_price = EXCLUDED.sell_price,
                purchase_price = EXCLUDED.purchase_price
            RETURNING id, name, sell_price, purchase_price"#,
        )
        .bind(product.id)
        .bind(&product.name)
        .bind(product.sell_price)
        .bind(product.purchase_price)
        .fetch_optional(&mut *tx)
        .await
        .map_err(database_error)?;

        // explicit ids bypass the identity sequence; move it past them so
        // later inserts do not collide
        sqlx::query(ADVANCE_ID_SEQUENCE)
            .bind(product.id)
            .execute(&mut *tx)
            .await
            .map_err(database_error)?;

        tx.commit().await.map_err(database_error)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(database_error)?;

        Ok(())
    }

    async fn get_above_price(&self, threshold: i32) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(
            "SELECT id, name, sell_price, purchase_price FROM products WHERE sell_price > $1",
        )
        .bind(threshold)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }
}
