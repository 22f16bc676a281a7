//! JSON API 集成测试
//!
//! `/api/url/{name}` 的增删查、`/api/urls/` 列表、token 认证，
//! 以及 `/healthz`、`/version`、`/links/`、`/admin/dumps`。

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::http::header::{AUTHORIZATION, LOCATION};
use actix_web::test::{self, TestRequest};
use actix_web::{App, web};
use serde_json::{Value, json};

use golinks::api;
use golinks::api::services::AppStartTime;
use golinks::config::AppConfig;
use golinks::services::RouteService;
use golinks::storage::{Backend, MemoryBackend, Route};

const TOKEN: &str = "test-token";

fn config_with(token: &str, admin: bool) -> AppConfig {
    let mut config = AppConfig::default();
    config.api.token = token.to_string();
    config.server.admin = admin;
    config.server.version = "9.9.9-test".to_string();
    config
}

macro_rules! app {
    ($backend:expr, $config:expr) => {{
        let backend: Arc<dyn Backend> = $backend;
        let config = Arc::new($config);
        test::init_service(
            App::new()
                .app_data(web::Data::new(backend.clone()))
                .app_data(web::Data::new(RouteService::new(backend)))
                .app_data(web::Data::new(config.clone()))
                .app_data(web::Data::new(AppStartTime::now()))
                .configure(|cfg| api::configure(cfg, &config)),
        )
        .await
    }};
}

fn empty_backend() -> Arc<dyn Backend> {
    Arc::new(MemoryBackend::new())
}

// =============================================================================
// CRUD
// =============================================================================

#[actix_rt::test]
async fn test_create_then_redirect() {
    let app = app!(empty_backend(), config_with("", false));

    let req = TestRequest::post()
        .uri("/api/url/docs")
        .set_json(json!({ "url": "https://docs.example.com" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["code"], 0);
    assert_eq!(body["data"]["name"], "docs");
    assert_eq!(body["data"]["url"], "https://docs.example.com");

    let resp = test::call_service(&app, TestRequest::get().uri("/docs").to_request()).await;
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(resp.headers().get(LOCATION).unwrap(), "https://docs.example.com");
}

#[actix_rt::test]
async fn test_get_missing_route() {
    let app = app!(empty_backend(), config_with("", false));

    let resp = test::call_service(&app, TestRequest::get().uri("/api/url/nope").to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 3000);
}

#[actix_rt::test]
async fn test_overwrite_and_delete() {
    let backend: Arc<dyn Backend> = Arc::new(MemoryBackend::with_routes([Route::new(
        "tmp",
        "https://old.example.com",
    )]));
    let app = app!(backend.clone(), config_with("", false));

    let req = TestRequest::post()
        .uri("/api/url/tmp")
        .set_json(json!({ "url": "https://new.example.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        backend.get("tmp").await.unwrap().unwrap().url,
        "https://new.example.com"
    );

    let resp = test::call_service(&app, TestRequest::delete().uri("/api/url/tmp").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = test::call_service(&app, TestRequest::delete().uri("/api/url/tmp").to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // 删除后回到编辑页
    let resp = test::call_service(&app, TestRequest::get().uri("/tmp").to_request()).await;
    assert_eq!(resp.headers().get(LOCATION).unwrap(), "/edit/tmp");
}

#[actix_rt::test]
async fn test_rejects_reserved_and_invalid_input() {
    let app = app!(empty_backend(), config_with("", false));

    let cases = [
        ("/api/url/edit", "https://example.com", 3001),
        ("/api/url/bad%20name", "https://example.com", 3006),
        ("/api/url/ok", "ftp://example.com/file", 3002),
        ("/api/url/ok", "not a url", 3002),
    ];

    for (uri, url, code) in cases {
        let req = TestRequest::post()
            .uri(uri)
            .set_json(json!({ "url": url }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{}", uri);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], code, "{} {}", uri, url);
    }
}

#[actix_rt::test]
async fn test_malformed_body_gets_json_envelope() {
    let app = app!(empty_backend(), config_with("", false));

    let req = TestRequest::post()
        .uri("/api/url/docs")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 1000);
    assert!(body["data"].is_null());

    // 缺少 url 字段
    let req = TestRequest::post()
        .uri("/api/url/docs")
        .set_json(json!({ "target": "https://example.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 1000);
}

#[actix_rt::test]
async fn test_list_routes_sorted() {
    let backend: Arc<dyn Backend> = Arc::new(MemoryBackend::with_routes([
        Route::new("zeta", "https://z.example.com"),
        Route::new("alpha", "https://a.example.com"),
    ]));
    let app = app!(backend, config_with("", false));

    let body: Value =
        test::call_and_read_body_json(&app, TestRequest::get().uri("/api/urls/").to_request())
            .await;
    let names: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["alpha", "zeta"]);
}

// =============================================================================
// Auth
// =============================================================================

#[actix_rt::test]
async fn test_token_required_when_configured() {
    let app = app!(empty_backend(), config_with(TOKEN, false));

    let req = TestRequest::post()
        .uri("/api/url/docs")
        .set_json(json!({ "url": "https://docs.example.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 1001);

    let req = TestRequest::post()
        .uri("/api/url/docs")
        .insert_header((AUTHORIZATION, "Bearer wrong"))
        .set_json(json!({ "url": "https://docs.example.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = TestRequest::post()
        .uri("/api/url/docs")
        .insert_header((AUTHORIZATION, format!("Bearer {}", TOKEN)))
        .set_json(json!({ "url": "https://docs.example.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_rt::test]
async fn test_redirects_do_not_require_token() {
    let backend: Arc<dyn Backend> = Arc::new(MemoryBackend::with_routes([Route::new(
        "foo",
        "https://example.com",
    )]));
    let app = app!(backend, config_with(TOKEN, false));

    let resp = test::call_service(&app, TestRequest::get().uri("/foo").to_request()).await;
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);

    let resp = test::call_service(&app, TestRequest::get().uri("/edit/foo").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

// =============================================================================
// Health / version / links / admin
// =============================================================================

#[actix_rt::test]
async fn test_healthz_reports_route_count() {
    let backend: Arc<dyn Backend> = Arc::new(MemoryBackend::with_routes([
        Route::new("a", "https://a.example.com"),
        Route::new("b", "https://b.example.com"),
    ]));
    let app = app!(backend, config_with("", false));

    let resp = test::call_service(&app, TestRequest::get().uri("/healthz").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["status"], "healthy");
    assert_eq!(body["data"]["backend"], "memory");
    assert_eq!(body["data"]["routes"], 2);
}

#[actix_rt::test]
async fn test_version() {
    let app = app!(empty_backend(), config_with("", false));

    let body = test::call_and_read_body(&app, TestRequest::get().uri("/version").to_request()).await;
    assert_eq!(body, "9.9.9-test");
}

#[actix_rt::test]
async fn test_links_redirects_to_listing() {
    let app = app!(empty_backend(), config_with("", false));

    let resp = test::call_service(&app, TestRequest::get().uri("/links/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(resp.headers().get(LOCATION).unwrap(), "/api/urls/");
}

#[actix_rt::test]
async fn test_admin_dumps_when_enabled() {
    let backend: Arc<dyn Backend> = Arc::new(MemoryBackend::with_routes([
        Route::new("b", "https://b.example.com"),
        Route::new("a", "https://a.example.com"),
    ]));
    let app = app!(backend, config_with("", true));

    let resp = test::call_service(&app, TestRequest::get().uri("/admin/dumps").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["a"]["url"], "https://a.example.com");
    assert_eq!(body["b"]["url"], "https://b.example.com");
}
