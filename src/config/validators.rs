//! 配置值验证模块
//!
//! 启动时对加载后的配置做一次检查，尽早报告明显错误。

use super::AppConfig;
use crate::errors::{GolinksError, Result};
use crate::storage::infer_backend_from_url;

const LOG_FORMATS: &[&str] = &["text", "json"];

/// 验证配置是否合法
///
/// - 端口不能为 0
/// - 查询超时必须大于 0（否则每次重定向都会立即超时）
/// - 日志格式只能是 text 或 json
/// - 数据库 URL 必须能推断出后端类型
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    if config.server.port == 0 {
        return Err(GolinksError::config("server.port must not be 0"));
    }

    if config.server.cpu_count == 0 {
        return Err(GolinksError::config("server.cpu_count must be at least 1"));
    }

    if config.database.lookup_timeout == 0 {
        return Err(GolinksError::config(
            "database.lookup_timeout must be greater than 0",
        ));
    }

    if !LOG_FORMATS.contains(&config.logging.format.as_str()) {
        return Err(GolinksError::config(format!(
            "Invalid logging.format: '{}'. Valid: text, json",
            config.logging.format
        )));
    }

    infer_backend_from_url(&config.database.database_url)?;

    Ok(())
}
