use fish_supply_api::{ApiError, ApiResult};
use fish_supply_db::sync::ChangeNotifier;
use sqlx::postgres::{PgPool, PgPoolOptions};
use tokio::sync::OnceCell;

use crate::config::DatabaseConfig;
use crate::postgres_repositories::{Gateways, PostgresRepositories};

/// Lazily opens one shared pool and hands out clones of it.
///
/// A failed connection attempt leaves the provider empty, so the next call
/// tries again.
pub struct ConnectionProvider {
    config: DatabaseConfig,
    pool: OnceCell<PgPool>,
}

impl ConnectionProvider {
    pub fn new(config: DatabaseConfig) -> Self {
        Self {
            config,
            pool: OnceCell::new(),
        }
    }

    pub fn from_env() -> ApiResult<Self> {
        Ok(Self::new(DatabaseConfig::from_env()?))
    }

    pub fn config(&self) -> &DatabaseConfig {
        &self.config
    }

    pub async fn pool(&self) -> ApiResult<PgPool> {
        self.pool
            .get_or_try_init(|| async {
                let options = self.config.connect_options()?;
                let pool = PgPoolOptions::new()
                    .max_connections(self.config.max_connections)
                    .acquire_timeout(self.config.acquire_timeout)
                    .connect_with(options)
                    .await
                    .map_err(|e| {
                        tracing::error!(error = %e, "Failed to open database pool");
                        ApiError::DatabaseError(e.to_string())
                    })?;
                tracing::info!(
                    max_connections = self.config.max_connections,
                    "Database pool opened"
                );
                Ok::<_, ApiError>(pool)
            })
            .await
            .cloned()
    }

    pub async fn repositories(&self) -> ApiResult<PostgresRepositories> {
        Ok(PostgresRepositories::new(self.pool().await?))
    }

    pub async fn gateways(&self, notifier: &ChangeNotifier) -> ApiResult<Gateways> {
        Ok(self.repositories().await?.create_gateways(notifier))
    }
}
