//! Write operations for SeaOrmStorage

use sea_orm::{EntityTrait, sea_query::OnConflict};
use tracing::info;

use super::converters::route_to_active_model;
use super::{SeaOrmStorage, retry};
use crate::errors::{GolinksError, Result};
use crate::storage::Route;

use migration::entities::route;

impl SeaOrmStorage {
    /// 使用 ON CONFLICT 的原子 upsert
    pub async fn upsert(&self, link: &Route) -> Result<()> {
        let db = &self.db;

        retry::with_retry(&format!("put({})", link.name), self.retry_config, || async {
            route::Entity::insert(route_to_active_model(link))
                .on_conflict(
                    OnConflict::column(route::Column::Name)
                        .update_columns([route::Column::Url, route::Column::CreatedAt])
                        .to_owned(),
                )
                .exec(db)
                .await
        })
        .await
        .map_err(|e| {
            GolinksError::database_operation(format!(
                "Failed to put route '{}': {}",
                link.name, e
            ))
        })?;

        info!("Route saved: {} -> {}", link.name, link.url);
        Ok(())
    }

    pub async fn remove(&self, name: &str) -> Result<bool> {
        let db = &self.db;
        let name_owned = name.to_string();

        let result = retry::with_retry(&format!("delete({})", name), self.retry_config, || async {
            route::Entity::delete_by_id(name_owned.clone())
                .exec(db)
                .await
        })
        .await
        .map_err(|e| {
            GolinksError::database_operation(format!("Failed to delete route '{}': {}", name, e))
        })?;

        let removed = result.rows_affected > 0;
        if removed {
            info!("Route deleted: {}", name);
        }
        Ok(removed)
    }
}
