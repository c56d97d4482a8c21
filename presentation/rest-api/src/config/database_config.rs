use std::env;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use business::domain::product::repository::ProductRepository;
use persistence::db::{DatabaseConfig, create_postgres_pool};
use persistence::product::memory::ProductRepositoryInMemory;
use persistence::product::repository::ProductRepositoryPostgres;

/// Read the database configuration from environment variables
///
/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string (optional)
/// - DATABASE_MAX_CONNECTIONS: pool size (default: 5)
/// - DATABASE_ACQUIRE_TIMEOUT_SECS: seconds to wait for a connection (default: 30)
///
/// Returns `None` when DATABASE_URL is not set.
///
/// # Errors
/// Returns error if a numeric variable cannot be parsed
pub fn database_config_from_env() -> anyhow::Result<Option<DatabaseConfig>> {
    let Ok(db_url) = env::var("DATABASE_URL") else {
        return Ok(None);
    };

    let mut config = DatabaseConfig::new(db_url);

    if let Ok(raw) = env::var("DATABASE_MAX_CONNECTIONS") {
        let max_connections = raw
            .parse::<u32>()
            .with_context(|| format!("DATABASE_MAX_CONNECTIONS is not a number: {raw}"))?;
        config = config.with_max_connections(max_connections);
    }

    if let Ok(raw) = env::var("DATABASE_ACQUIRE_TIMEOUT_SECS") {
        let secs = raw
            .parse::<u64>()
            .with_context(|| format!("DATABASE_ACQUIRE_TIMEOUT_SECS is not a number: {raw}"))?;
        config = config.with_acquire_timeout(Duration::from_secs(secs));
    }

    Ok(Some(config))
}

/// Initialize the product repository
///
/// Connects to PostgreSQL when DATABASE_URL is set, otherwise falls back to
/// the in-memory store.
///
/// # Errors
/// Returns error if the configuration is malformed or the connection fails
pub async fn init_repository() -> anyhow::Result<Arc<dyn ProductRepository>> {
    match database_config_from_env()? {
        Some(config) => {
            let pool = create_postgres_pool(&config)
                .await
                .context("failed to connect to PostgreSQL")?;
            tracing::info!(
                max_connections = config.max_connections,
                "Using PostgreSQL product repository"
            );
            Ok(Arc::new(ProductRepositoryPostgres::new(pool)))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, products are kept in memory");
            Ok(Arc::new(ProductRepositoryInMemory::new()))
        }
    }
}
