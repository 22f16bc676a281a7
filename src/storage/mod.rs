use std::sync::Arc;

use crate::config::DatabaseConfig;
use crate::errors::{GolinksError, Result};

pub mod backend;
pub mod memory;
pub mod models;
pub mod traits;

pub use backend::SeaOrmStorage;
pub use memory::MemoryBackend;
pub use models::Route;
pub use traits::Backend;

/// 存储引擎类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    Memory,
    Sqlite,
    MySql,
    Postgres,
}

impl BackendKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::Memory => "memory",
            BackendKind::Sqlite => "sqlite",
            BackendKind::MySql => "mysql",
            BackendKind::Postgres => "postgres",
        }
    }
}

/// 从数据库 URL 推断存储引擎
pub fn infer_backend_from_url(database_url: &str) -> Result<BackendKind> {
    if database_url.starts_with("memory://") {
        Ok(BackendKind::Memory)
    } else if database_url.starts_with("sqlite://")
        || database_url.ends_with(".db")
        || database_url.ends_with(".sqlite")
    {
        Ok(BackendKind::Sqlite)
    } else if database_url.starts_with("mysql://") || database_url.starts_with("mariadb://") {
        Ok(BackendKind::MySql)
    } else if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://")
    {
        Ok(BackendKind::Postgres)
    } else {
        Err(GolinksError::database_config(format!(
            "Cannot infer backend from URL: {}. Supported: memory://, sqlite://, mysql://, mariadb://, postgres://",
            database_url
        )))
    }
}

pub struct StorageFactory;

impl StorageFactory {
    pub async fn create(config: &DatabaseConfig) -> Result<Arc<dyn Backend>> {
        let kind = infer_backend_from_url(&config.database_url)?;

        let backend: Arc<dyn Backend> = match kind {
            BackendKind::Memory => Arc::new(MemoryBackend::new()),
            _ => Arc::new(SeaOrmStorage::new(config, kind).await?),
        };

        Ok(backend)
    }
}
