use serde::{Deserialize, Serialize};

/// API 错误码
///
/// - 0: 成功
/// - 1000-1099: 通用错误
/// - 3000-3099: 路由错误
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    BadRequest = 1000,
    Unauthorized = 1001,
    InternalServerError = 1005,
    ServiceUnavailable = 1030,

    RouteNotFound = 3000,
    RouteReservedName = 3001,
    RouteInvalidUrl = 3002,
    RouteDatabaseError = 3005,
    RouteInvalidName = 3006,
}

/// 统一响应包
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ApiResponse<T> {
    pub code: i32,
    pub message: String,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            code: ErrorCode::Success as i32,
            message: "OK".to_string(),
            data: Some(data),
        }
    }

    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code as i32,
            message: message.into(),
            data: None,
        }
    }
}

/// POST /api/url/{name} 请求体
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PostRoute {
    pub url: String,
}

/// /healthz 响应
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct HealthResponse {
    pub status: String,
    pub backend: String,
    pub routes: Option<usize>,
    pub uptime: u64,
    pub error: Option<String>,
}
