//! Read operations for SeaOrmStorage

use sea_orm::{EntityTrait, PaginatorTrait, QueryOrder};
use tracing::{debug, error};

use super::converters::model_to_route;
use super::{SeaOrmStorage, retry};
use crate::errors::{GolinksError, Result};
use crate::storage::Route;

use migration::entities::route;

impl SeaOrmStorage {
    pub async fn find(&self, name: &str) -> Result<Option<Route>> {
        let db = &self.db;
        let name_owned = name.to_string();

        let result = retry::with_retry(&format!("get({})", name), self.retry_config, || async {
            route::Entity::find_by_id(name_owned.clone()).one(db).await
        })
        .await;

        match result {
            Ok(Some(model)) => Ok(Some(model_to_route(model))),
            Ok(None) => {
                debug!("Route not found in database: {}", name);
                Ok(None)
            }
            Err(e) => {
                error!("Route lookup failed after retries: {}", e);
                Err(GolinksError::database_operation(format!(
                    "Failed to get route '{}': {}",
                    name, e
                )))
            }
        }
    }

    pub async fn find_all(&self) -> Result<Vec<Route>> {
        let db = &self.db;

        let models = retry::with_retry("get_all", self.retry_config, || async {
            route::Entity::find()
                .order_by_asc(route::Column::Name)
                .all(db)
                .await
        })
        .await
        .map_err(|e| GolinksError::database_operation(format!("Failed to list routes: {}", e)))?;

        debug!("Loaded {} routes", models.len());
        Ok(models.into_iter().map(model_to_route).collect())
    }

    pub async fn count_routes(&self) -> Result<u64> {
        route::Entity::find()
            .count(&self.db)
            .await
            .map_err(|e| GolinksError::database_operation(format!("Failed to count routes: {}", e)))
    }
}
