pub mod middleware;
pub mod services;

use actix_web::web;

use crate::config::AppConfig;
use services::{admin_routes, api_routes, edit_routes, health_routes, links_routes, redirect_routes};

/// 注册全部路由
///
/// 默认路由 `/{path:.*}` 会匹配任意路径，所以放在最后。
pub fn configure(cfg: &mut web::ServiceConfig, config: &AppConfig) {
    cfg.service(api_routes(&config.api.token));
    edit_routes(cfg);
    health_routes(cfg);
    links_routes(cfg);
    if config.server.admin {
        admin_routes(cfg);
    }
    redirect_routes(cfg);
}
