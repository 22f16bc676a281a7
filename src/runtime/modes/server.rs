//! Server mode
//!
//! 组装存储后端、路由和中间件，启动 HTTP 服务。

use actix_web::{App, HttpServer, middleware::Compress, web};
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::warn;

use crate::api;
use crate::api::middleware::RequestIdMiddleware;
use crate::api::services::AppStartTime;
use crate::config::AppConfig;
use crate::runtime::lifetime;

/// Run the HTTP server
///
/// **Note**: 调用前需要先初始化日志
pub async fn run_server(config: AppConfig) -> Result<()> {
    let app_start_time = AppStartTime::now();

    let startup = lifetime::startup::prepare_server_startup(&config)
        .await
        .inspect_err(|e| tracing::error!("Server startup failed: {:#}", e))?;

    let backend = startup.backend;
    let route_service = startup.route_service;

    let cpu_count = config.server.cpu_count.clamp(1, 32);
    warn!("Using {} CPU cores for the server", cpu_count);

    if config.server.admin {
        warn!("Admin routes enabled at /admin/");
    }

    let bind_address = format!("{}:{}", config.server.host, config.server.port);
    let config = Arc::new(config);

    let server = HttpServer::new(move || {
        let config = config.clone();
        App::new()
            .wrap(RequestIdMiddleware)
            .wrap(Compress::default())
            .app_data(web::Data::new(backend.clone()))
            .app_data(web::Data::new(route_service.clone()))
            .app_data(web::Data::new(config.clone()))
            .app_data(web::Data::new(app_start_time.clone()))
            .app_data(web::PayloadConfig::new(64 * 1024))
            .configure(|cfg| api::configure(cfg, &config))
    })
    .keep_alive(std::time::Duration::from_secs(30))
    .workers(cpu_count);

    warn!("Starting server at http://{}", bind_address);
    let server = server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run();

    tokio::select! {
        res = server => {
            res?;
        }
        _ = lifetime::shutdown::listen_for_shutdown() => {
            warn!("Graceful shutdown");
        }
    }

    Ok(())
}
