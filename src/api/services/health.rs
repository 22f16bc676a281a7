use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, web};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{error, info, trace};

use super::types::{ApiResponse, ErrorCode, HealthResponse};
use crate::config::AppConfig;
use crate::storage::Backend;

const HEALTH_CHECK_TIMEOUT: Duration = Duration::from_secs(5);

// 应用启动时间
#[derive(Clone, Debug)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

impl AppStartTime {
    pub fn now() -> Self {
        Self {
            start_datetime: chrono::Utc::now(),
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        (chrono::Utc::now() - self.start_datetime)
            .num_seconds()
            .max(0) as u64
    }
}

/// Health Service
///
/// 直接调用存储后端的 count，不走 RouteService。
pub struct HealthService;

impl HealthService {
    pub async fn health_check(
        backend: web::Data<Arc<dyn Backend>>,
        app_start_time: web::Data<AppStartTime>,
    ) -> impl Responder {
        let start_time = Instant::now();
        trace!("Received health check request");

        let backend_name = backend.backend_name().to_string();
        let (routes, failure) =
            match tokio::time::timeout(HEALTH_CHECK_TIMEOUT, backend.count()).await {
                Ok(Ok(count)) => {
                    trace!("Backend health check passed, {} routes found", count);
                    (Some(count), None)
                }
                Ok(Err(e)) => {
                    error!("Backend health check failed: {}", e);
                    (None, Some(format!("backend error: {}", e)))
                }
                Err(_) => {
                    error!("Backend health check timeout");
                    (None, Some("timeout".to_string()))
                }
            };

        let is_healthy = failure.is_none();
        let health = HealthResponse {
            status: if is_healthy { "healthy" } else { "unhealthy" }.to_string(),
            backend: backend_name,
            routes,
            uptime: app_start_time.uptime_seconds(),
            error: failure,
        };

        let (status, body) = if is_healthy {
            (StatusCode::OK, ApiResponse::success(health))
        } else {
            (
                StatusCode::SERVICE_UNAVAILABLE,
                ApiResponse {
                    code: ErrorCode::ServiceUnavailable as i32,
                    message: "Service Unavailable".to_string(),
                    data: Some(health),
                },
            )
        };

        info!(
            "Health check completed in {:?}, status: {}",
            start_time.elapsed(),
            if is_healthy { "healthy" } else { "unhealthy" }
        );

        HttpResponse::build(status).json(body)
    }

    pub async fn version(config: web::Data<Arc<AppConfig>>) -> impl Responder {
        HttpResponse::Ok()
            .content_type("text/plain; charset=utf-8")
            .body(config.server.version.clone())
    }
}

pub fn health_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/healthz", web::get().to(HealthService::health_check))
        .route("/healthz", web::head().to(HealthService::health_check))
        .route("/version", web::get().to(HealthService::version));
}
