use std::fmt;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

#[derive(Debug, Clone)]
pub enum GolinksError {
    Config(String),
    DatabaseConfig(String),
    DatabaseConnection(String),
    DatabaseOperation(String),
    Timeout(String),
    FileOperation(String),
    Validation(String),
    Serialization(String),
}

impl GolinksError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            GolinksError::Config(_) => "E001",
            GolinksError::DatabaseConfig(_) => "E002",
            GolinksError::DatabaseConnection(_) => "E003",
            GolinksError::DatabaseOperation(_) => "E004",
            GolinksError::Timeout(_) => "E005",
            GolinksError::FileOperation(_) => "E006",
            GolinksError::Validation(_) => "E007",
            GolinksError::Serialization(_) => "E008",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            GolinksError::Config(_) => "Configuration Error",
            GolinksError::DatabaseConfig(_) => "Database Configuration Error",
            GolinksError::DatabaseConnection(_) => "Database Connection Error",
            GolinksError::DatabaseOperation(_) => "Database Operation Error",
            GolinksError::Timeout(_) => "Backend Timeout",
            GolinksError::FileOperation(_) => "File Operation Error",
            GolinksError::Validation(_) => "Validation Error",
            GolinksError::Serialization(_) => "Serialization Error",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            GolinksError::Config(msg)
            | GolinksError::DatabaseConfig(msg)
            | GolinksError::DatabaseConnection(msg)
            | GolinksError::DatabaseOperation(msg)
            | GolinksError::Timeout(msg)
            | GolinksError::FileOperation(msg)
            | GolinksError::Validation(msg)
            | GolinksError::Serialization(msg) => msg,
        }
    }

    /// 彩色输出，用于启动失败时打印到终端
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }

    /// 是否为存储层故障（相对于调用方输入错误）
    pub fn is_backend_failure(&self) -> bool {
        matches!(
            self,
            GolinksError::DatabaseConnection(_)
                | GolinksError::DatabaseOperation(_)
                | GolinksError::Timeout(_)
        )
    }
}

impl fmt::Display for GolinksError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for GolinksError {}

// 便捷的构造函数
impl GolinksError {
    pub fn config<T: Into<String>>(msg: T) -> Self {
        GolinksError::Config(msg.into())
    }

    pub fn database_config<T: Into<String>>(msg: T) -> Self {
        GolinksError::DatabaseConfig(msg.into())
    }

    pub fn database_connection<T: Into<String>>(msg: T) -> Self {
        GolinksError::DatabaseConnection(msg.into())
    }

    pub fn database_operation<T: Into<String>>(msg: T) -> Self {
        GolinksError::DatabaseOperation(msg.into())
    }

    pub fn timeout<T: Into<String>>(msg: T) -> Self {
        GolinksError::Timeout(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        GolinksError::FileOperation(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        GolinksError::Validation(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        GolinksError::Serialization(msg.into())
    }
}

impl From<sea_orm::DbErr> for GolinksError {
    fn from(err: sea_orm::DbErr) -> Self {
        GolinksError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for GolinksError {
    fn from(err: std::io::Error) -> Self {
        GolinksError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for GolinksError {
    fn from(err: serde_json::Error) -> Self {
        GolinksError::Serialization(err.to_string())
    }
}

impl From<config::ConfigError> for GolinksError {
    fn from(err: config::ConfigError) -> Self {
        GolinksError::Config(err.to_string())
    }
}

/// HTTP 层错误映射：handler 返回 `Err(GolinksError)` 时由 actix 调用
impl ResponseError for GolinksError {
    fn status_code(&self) -> StatusCode {
        match self {
            GolinksError::Validation(_) => StatusCode::BAD_REQUEST,
            GolinksError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header(("Content-Type", "text/plain; charset=utf-8"))
            .body(self.status_code().canonical_reason().unwrap_or("Error"))
    }
}

pub type Result<T> = std::result::Result<T, GolinksError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            GolinksError::validation("bad").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            GolinksError::database_operation("disk full").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert!(GolinksError::timeout("slow").status_code().is_server_error());
    }

    #[test]
    fn test_backend_failure_classification() {
        assert!(GolinksError::database_connection("refused").is_backend_failure());
        assert!(GolinksError::timeout("1m").is_backend_failure());
        assert!(!GolinksError::validation("bad name").is_backend_failure());
    }

    #[test]
    fn test_display_uses_simple_format() {
        let err = GolinksError::database_operation("locked");
        assert_eq!(err.to_string(), "Database Operation Error: locked");
        assert_eq!(err.code(), "E004");
    }
}
