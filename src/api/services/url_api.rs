use actix_web::body::{BoxBody, EitherBody};
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, web};
use tracing::{debug, error};

use super::types::{ApiResponse, ErrorCode, PostRoute};
use crate::api::middleware::ApiAuth;
use crate::services::{RouteService, RouteServiceError, ShortName, temporary_redirect};
use crate::storage::Route;

pub struct UrlApiService;

impl UrlApiService {
    fn error_response(err: RouteServiceError) -> HttpResponse {
        let (status, code) = match &err {
            RouteServiceError::InvalidName(_) => {
                (StatusCode::BAD_REQUEST, ErrorCode::RouteInvalidName)
            }
            RouteServiceError::ReservedName(_) => {
                (StatusCode::BAD_REQUEST, ErrorCode::RouteReservedName)
            }
            RouteServiceError::InvalidUrl(_) => {
                (StatusCode::BAD_REQUEST, ErrorCode::RouteInvalidUrl)
            }
            RouteServiceError::Backend(e) => {
                error!("Route API backend failure: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::RouteDatabaseError,
                )
            }
        };

        HttpResponse::build(status).json(ApiResponse::<()>::error(code, err.to_string()))
    }

    fn not_found(name: &ShortName) -> HttpResponse {
        HttpResponse::NotFound().json(ApiResponse::<()>::error(
            ErrorCode::RouteNotFound,
            format!("Route not found: {}", name),
        ))
    }

    pub async fn get_url(
        path: web::Path<String>,
        service: web::Data<RouteService>,
    ) -> HttpResponse {
        let name = ShortName::new(path.into_inner());
        match service.get(&name).await {
            Ok(Some(route)) => HttpResponse::Ok().json(ApiResponse::success(route)),
            Ok(None) => Self::not_found(&name),
            Err(e) => Self::error_response(e),
        }
    }

    pub async fn post_url(
        path: web::Path<String>,
        body: web::Json<PostRoute>,
        service: web::Data<RouteService>,
    ) -> HttpResponse {
        let name = ShortName::new(path.into_inner());
        match service.put(&name, &body.url).await {
            Ok(route) => HttpResponse::Ok().json(ApiResponse::success(route)),
            Err(e) => Self::error_response(e),
        }
    }

    pub async fn delete_url(
        path: web::Path<String>,
        service: web::Data<RouteService>,
    ) -> HttpResponse {
        let name = ShortName::new(path.into_inner());
        match service.delete(&name).await {
            Ok(true) => HttpResponse::Ok().json(ApiResponse::<()>::success(())),
            Ok(false) => Self::not_found(&name),
            Err(e) => Self::error_response(e),
        }
    }

    pub async fn list_urls(service: web::Data<RouteService>) -> HttpResponse {
        match service.list().await {
            Ok(routes) => HttpResponse::Ok().json(ApiResponse::<Vec<Route>>::success(routes)),
            Err(e) => Self::error_response(e),
        }
    }

    /// 列表页不在服务端渲染，直接转到 JSON 列表
    pub async fn handle_links() -> HttpResponse {
        temporary_redirect("/api/urls/")
    }
}

/// 请求体解析失败时同样返回 JSON 响应包
fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    debug!("Rejected request body for {}: {}", req.path(), err);
    let response = HttpResponse::BadRequest().json(ApiResponse::<()>::error(
        ErrorCode::BadRequest,
        format!("Invalid request body: {}", err),
    ));
    InternalError::from_response(err, response).into()
}

/// `/api` 路由，token 为空时不认证
pub fn api_routes(
    token: &str,
) -> actix_web::Scope<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<EitherBody<BoxBody>>,
        Error = actix_web::Error,
        InitError = (),
    > + use<>,
> {
    web::scope("/api")
        .wrap(ApiAuth::new(token))
        .app_data(
            web::JsonConfig::default()
                .limit(64 * 1024)
                .error_handler(json_error_handler),
        )
        .route("/url/{name}", web::get().to(UrlApiService::get_url))
        .route("/url/{name}", web::post().to(UrlApiService::post_url))
        .route("/url/{name}", web::delete().to(UrlApiService::delete_url))
        .route("/urls", web::get().to(UrlApiService::list_urls))
        .route("/urls/", web::get().to(UrlApiService::list_urls))
}

pub fn links_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/links", web::get().to(UrlApiService::handle_links))
        .route("/links/", web::get().to(UrlApiService::handle_links));
}
