use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, web};
use tracing::trace;

use crate::config::AppConfig;
use crate::errors::GolinksError;
use crate::services::dispatcher::EDIT_PREFIX;
use crate::services::{decode_path, dispatch, parse_name, resolve, temporary_redirect};
use crate::storage::Backend;

pub struct RedirectService;

impl RedirectService {
    /// 默认路由：`/` 去编辑页，其余名称查询后重定向
    pub async fn handle_redirect(
        req: HttpRequest,
        backend: web::Data<Arc<dyn Backend>>,
        config: web::Data<Arc<AppConfig>>,
    ) -> Result<HttpResponse, GolinksError> {
        let name = parse_name("/", &decode_path(req.path()));

        if name.is_empty() {
            trace!("Empty name, redirecting to editor");
            return Ok(temporary_redirect(EDIT_PREFIX));
        }

        let outcome = resolve(
            backend.get_ref().as_ref(),
            &name,
            config.database.lookup_budget(),
        )
        .await;

        dispatch(outcome, &name).into_response()
    }
}

/// 默认路由，必须最后注册
pub fn redirect_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/{path:.*}", web::get().to(RedirectService::handle_redirect))
        .route("/{path:.*}", web::head().to(RedirectService::handle_redirect));
}
