//! SeaORM storage backend
//!
//! Routes persisted in SQLite, MySQL/MariaDB or PostgreSQL.

mod connection;
mod converters;
mod mutations;
mod query;
pub mod retry;

use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use tracing::info;

use super::{Backend, BackendKind, Route};
use crate::config::DatabaseConfig;
use crate::errors::{GolinksError, Result};

pub use connection::{connect_generic, connect_sqlite, run_migrations};
pub use converters::{model_to_route, route_to_active_model};

#[derive(Clone)]
pub struct SeaOrmStorage {
    db: DatabaseConnection,
    backend_name: String,
    retry_config: retry::RetryConfig,
}

impl SeaOrmStorage {
    pub async fn new(config: &DatabaseConfig, kind: BackendKind) -> Result<Self> {
        let database_url = config.database_url.as_str();
        if database_url.is_empty() {
            return Err(GolinksError::database_config("database_url is empty"));
        }

        let db = match kind {
            BackendKind::Sqlite => connect_sqlite(database_url).await?,
            BackendKind::MySql | BackendKind::Postgres => {
                connect_generic(database_url, kind.as_str(), config.pool_size).await?
            }
            BackendKind::Memory => {
                return Err(GolinksError::database_config(
                    "memory:// is not a SeaORM database",
                ));
            }
        };

        run_migrations(&db).await?;

        let storage = SeaOrmStorage {
            db,
            backend_name: kind.as_str().to_string(),
            retry_config: retry::RetryConfig::from(config),
        };

        info!("{} storage initialized.", storage.backend_name.to_uppercase());
        Ok(storage)
    }
}

#[async_trait]
impl Backend for SeaOrmStorage {
    async fn get(&self, name: &str) -> Result<Option<Route>> {
        self.find(name).await
    }

    async fn get_all(&self) -> Result<Vec<Route>> {
        self.find_all().await
    }

    async fn put(&self, route: &Route) -> Result<()> {
        self.upsert(route).await
    }

    async fn delete(&self, name: &str) -> Result<bool> {
        self.remove(name).await
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.count_routes().await? as usize)
    }

    fn backend_name(&self) -> &str {
        &self.backend_name
    }
}
