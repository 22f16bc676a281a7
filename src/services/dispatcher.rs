//! Redirect decisions
//!
//! 把查询结果变成 HTTP 层的动作：重定向到目标、重定向到编辑页，
//! 或者把后端错误交给错误映射层（500）。

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use actix_web::http::header::{CACHE_CONTROL, CONTENT_TYPE, LOCATION};
use tracing::error;

use super::ban_list::is_banned_name;
use super::name::{ShortName, clean_name};
use super::resolver::ResolveOutcome;
use crate::errors::GolinksError;

pub const EDIT_PREFIX: &str = "/edit/";

/// 默认路由的处理结果
#[derive(Debug)]
pub enum Dispatch {
    /// 307 到指定位置
    Redirect { location: String },
    /// 保留名称没有对应路由，不能再送回编辑页
    NotFound,
    /// 后端故障，本请求无法继续
    Fatal { name: String, error: GolinksError },
}

/// 编辑路由的处理结果
#[derive(Debug, PartialEq, Eq)]
pub enum EditDecision {
    Redirect { location: String },
    ServeEditor,
}

/// 编辑页地址：`/edit/` + 清理后的名称（百分号编码）
pub fn edit_location(name: &ShortName) -> String {
    let cleaned = clean_name(name.as_str());
    format!("{}{}", EDIT_PREFIX, urlencoding::encode(&cleaned))
}

pub fn dispatch(outcome: ResolveOutcome, name: &ShortName) -> Dispatch {
    match outcome {
        ResolveOutcome::Found { target } => Dispatch::Redirect { location: target },
        ResolveOutcome::NotFound if is_banned_name(name.as_str()) => Dispatch::NotFound,
        ResolveOutcome::NotFound => Dispatch::Redirect {
            location: edit_location(name),
        },
        ResolveOutcome::BackendError(error) => Dispatch::Fatal {
            name: name.to_string(),
            error,
        },
    }
}

/// 编辑路由：保留名称直接重定向到不带前缀的路径，不显示编辑页
pub fn dispatch_edit(name: &ShortName) -> EditDecision {
    if is_banned_name(name.as_str()) {
        EditDecision::Redirect {
            location: format!("/{}", name),
        }
    } else {
        EditDecision::ServeEditor
    }
}

pub fn temporary_redirect(location: &str) -> HttpResponse {
    HttpResponse::build(StatusCode::TEMPORARY_REDIRECT)
        .insert_header((LOCATION, location))
        .finish()
}

impl Dispatch {
    /// 转换为 HTTP 响应；后端故障记录日志后以 `Err` 交给 `ResponseError`
    pub fn into_response(self) -> Result<HttpResponse, GolinksError> {
        match self {
            Dispatch::Redirect { location } => Ok(temporary_redirect(&location)),
            Dispatch::NotFound => Ok(HttpResponse::NotFound()
                .insert_header((CONTENT_TYPE, "text/plain; charset=utf-8"))
                .insert_header((CACHE_CONTROL, "public, max-age=60"))
                .body("Not Found")),
            Dispatch::Fatal { name, error } => {
                error!(name = %name, cause = %error, "Backend failure while resolving route");
                Err(error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location_of(dispatch: Dispatch) -> String {
        match dispatch {
            Dispatch::Redirect { location } => location,
            other => panic!("expected redirect, got {:?}", other),
        }
    }

    #[test]
    fn test_found_redirects_to_target() {
        let outcome = ResolveOutcome::Found {
            target: "https://example.com".to_string(),
        };
        let name = ShortName::new("foo");
        assert_eq!(location_of(dispatch(outcome, &name)), "https://example.com");
    }

    #[test]
    fn test_not_found_redirects_to_edit() {
        let name = ShortName::new("bar");
        assert_eq!(
            location_of(dispatch(ResolveOutcome::NotFound, &name)),
            "/edit/bar"
        );
    }

    #[test]
    fn test_empty_name_redirects_to_edit_root() {
        assert_eq!(
            location_of(dispatch(ResolveOutcome::NotFound, &ShortName::empty())),
            "/edit/"
        );
    }

    #[test]
    fn test_backend_error_is_fatal() {
        let outcome = ResolveOutcome::BackendError(GolinksError::database_operation("io"));
        match dispatch(outcome, &ShortName::new("foo")) {
            Dispatch::Fatal { name, error } => {
                assert_eq!(name, "foo");
                assert!(error.is_backend_failure());
            }
            other => panic!("expected Fatal, got {:?}", other),
        }
    }

    #[test]
    fn test_fatal_maps_to_error() {
        let fatal = Dispatch::Fatal {
            name: "foo".to_string(),
            error: GolinksError::database_connection("refused"),
        };
        assert!(fatal.into_response().is_err());
    }

    #[test]
    fn test_banned_name_without_route_is_plain_not_found() {
        let dispatch = dispatch(ResolveOutcome::NotFound, &ShortName::new("api"));
        assert!(matches!(dispatch, Dispatch::NotFound));
    }

    #[test]
    fn test_edit_location_encodes_unsafe_names() {
        assert_eq!(edit_location(&ShortName::new("a b")), "/edit/a%20b");
        assert_eq!(edit_location(&ShortName::new("go-v1.2_x")), "/edit/go-v1.2_x");
    }

    #[test]
    fn test_dispatch_edit() {
        assert_eq!(
            dispatch_edit(&ShortName::new("api")),
            EditDecision::Redirect {
                location: "/api".to_string()
            }
        );
        assert_eq!(
            dispatch_edit(&ShortName::new("edit")),
            EditDecision::Redirect {
                location: "/edit".to_string()
            }
        );
        assert_eq!(dispatch_edit(&ShortName::new("foo")), EditDecision::ServeEditor);
        assert_eq!(dispatch_edit(&ShortName::empty()), EditDecision::ServeEditor);
    }

    #[test]
    fn test_redirect_response_is_307() {
        let response = temporary_redirect("https://example.com");
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(
            response.headers().get(LOCATION).unwrap(),
            "https://example.com"
        );
    }
}
