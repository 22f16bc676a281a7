use actix_web::http::header::CONTENT_TYPE;
use actix_web::{HttpRequest, HttpResponse, web};
use rust_embed::Embed;
use tracing::{debug, trace};

use crate::services::dispatcher::EDIT_PREFIX;
use crate::services::{EditDecision, decode_path, dispatch_edit, parse_name, temporary_redirect};

/// 编辑页及其静态资源
#[derive(Embed)]
#[folder = "assets/"]
struct EditAssets;

pub struct EditService;

impl EditService {
    /// `/edit/{name}`：保留名称重定向到 `/<name>`，否则返回编辑页
    pub async fn handle_edit(req: HttpRequest) -> HttpResponse {
        let name = parse_name(EDIT_PREFIX, &decode_path(req.path()));

        match dispatch_edit(&name) {
            EditDecision::Redirect { location } => {
                debug!("Reserved name '{}' requested in editor", name);
                temporary_redirect(&location)
            }
            EditDecision::ServeEditor => Self::serve_editor(),
        }
    }

    /// `/edit` 补上尾部斜杠
    pub async fn handle_edit_root() -> HttpResponse {
        temporary_redirect(EDIT_PREFIX)
    }

    /// `/s/{path}`
    pub async fn handle_static(req: HttpRequest) -> HttpResponse {
        let path = req.match_info().query("path");
        trace!("Serving static asset: {}", path);
        Self::serve_asset(path)
    }

    fn serve_editor() -> HttpResponse {
        match EditAssets::get("edit.html") {
            Some(content) => {
                let html = String::from_utf8_lossy(&content.data)
                    .replace("%GOLINKS_VERSION%", env!("CARGO_PKG_VERSION"));
                HttpResponse::Ok()
                    .content_type("text/html; charset=utf-8")
                    .body(html)
            }
            None => HttpResponse::NotFound().body("Not Found"),
        }
    }

    fn serve_asset(path: &str) -> HttpResponse {
        // 编辑页只通过 /edit/ 提供，保证保留名称检查不被绕过
        if path.is_empty() || path == "edit.html" {
            return HttpResponse::NotFound().body("File not found");
        }

        match EditAssets::get(path) {
            Some(content) => HttpResponse::Ok()
                .insert_header((CONTENT_TYPE, content_type_for(path)))
                .body(content.data.into_owned()),
            None => {
                debug!("Static asset not found: {}", path);
                HttpResponse::NotFound().body("File not found")
            }
        }
    }
}

fn content_type_for(path: &str) -> &'static str {
    match path.rsplit('.').next() {
        Some("css") => "text/css; charset=utf-8",
        Some("js") => "application/javascript; charset=utf-8",
        Some("json") => "application/json",
        Some("html") => "text/html; charset=utf-8",
        Some("png") => "image/png",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        _ => "application/octet-stream",
    }
}

pub fn edit_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/edit", web::get().to(EditService::handle_edit_root))
        .route("/edit/{path:.*}", web::get().to(EditService::handle_edit))
        .route("/edit/{path:.*}", web::head().to(EditService::handle_edit))
        .route("/s/{path:.*}", web::get().to(EditService::handle_static));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_for() {
        assert_eq!(content_type_for("edit.js"), "application/javascript; charset=utf-8");
        assert_eq!(content_type_for("a/b/style.css"), "text/css; charset=utf-8");
        assert_eq!(content_type_for("blob"), "application/octet-stream");
    }
}
