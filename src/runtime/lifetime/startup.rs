use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::config::AppConfig;
use crate::services::RouteService;
use crate::storage::{Backend, StorageFactory};

pub struct StartupContext {
    pub backend: Arc<dyn Backend>,
    pub route_service: RouteService,
}

/// 准备服务器启动的上下文：存储后端和路由服务
pub async fn prepare_server_startup(config: &AppConfig) -> Result<StartupContext> {
    let start_time = std::time::Instant::now();
    debug!("Starting pre-startup processing...");

    let backend = StorageFactory::create(&config.database)
        .await
        .context("Failed to create storage backend")?;
    info!("Using storage backend: {}", backend.backend_name());

    match backend.count().await {
        Ok(count) => info!("{} routes available", count),
        Err(e) => warn!("Failed to count routes at startup: {}", e),
    }

    if config.api.token.is_empty() {
        warn!("api.token is empty, the /api endpoints accept unauthenticated writes");
    }

    let route_service = RouteService::new(backend.clone());

    debug!("Pre-startup processing completed in {:?}", start_time.elapsed());

    Ok(StartupContext {
        backend,
        route_service,
    })
}
