use std::collections::BTreeMap;
use std::sync::Arc;

use actix_web::{HttpResponse, web};
use tracing::{error, info};

use super::types::{ApiResponse, ErrorCode};
use crate::storage::{Backend, Route};

/// 管理接口，仅在 `server.admin = true` 时注册
pub struct AdminService;

impl AdminService {
    /// 导出全部路由，按名称排序
    pub async fn dumps(backend: web::Data<Arc<dyn Backend>>) -> HttpResponse {
        match backend.get_all().await {
            Ok(routes) => {
                info!("Admin dump: {} routes", routes.len());
                let dump: BTreeMap<String, Route> = routes
                    .into_iter()
                    .map(|route| (route.name.clone(), route))
                    .collect();
                HttpResponse::Ok().json(dump)
            }
            Err(e) => {
                error!("Admin dump failed: {}", e);
                HttpResponse::InternalServerError().json(ApiResponse::<()>::error(
                    ErrorCode::InternalServerError,
                    e.to_string(),
                ))
            }
        }
    }
}

pub fn admin_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/admin/dumps", web::get().to(AdminService::dumps));
}
