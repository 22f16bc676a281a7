//! Route management service
//!
//! JSON API 使用的业务逻辑：校验名称和目标 URL，再写入存储后端。
//! 重定向路径不经过这里，只读地走 resolver。

use std::sync::Arc;

use tracing::info;

use super::ban_list::is_banned_name;
use super::name::ShortName;
use crate::errors::GolinksError;
use crate::storage::{Backend, Route};
use crate::utils::{UrlValidationError, validate_url};

#[derive(Debug)]
pub enum RouteServiceError {
    /// 名称为空、含非法字符或过长
    InvalidName(String),
    /// 名称被系统路由占用
    ReservedName(String),
    InvalidUrl(UrlValidationError),
    Backend(GolinksError),
}

impl std::fmt::Display for RouteServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidName(name) => write!(f, "Invalid name: '{}'", name),
            Self::ReservedName(name) => write!(f, "Name '{}' is reserved", name),
            Self::InvalidUrl(e) => write!(f, "{}", e),
            Self::Backend(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for RouteServiceError {}

impl From<GolinksError> for RouteServiceError {
    fn from(err: GolinksError) -> Self {
        RouteServiceError::Backend(err)
    }
}

#[derive(Clone)]
pub struct RouteService {
    backend: Arc<dyn Backend>,
}

impl RouteService {
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &Arc<dyn Backend> {
        &self.backend
    }

    fn check_name(name: &ShortName) -> Result<(), RouteServiceError> {
        if !name.is_valid() {
            return Err(RouteServiceError::InvalidName(name.to_string()));
        }
        if is_banned_name(name.as_str()) {
            return Err(RouteServiceError::ReservedName(name.to_string()));
        }
        Ok(())
    }

    pub async fn get(&self, name: &ShortName) -> Result<Option<Route>, RouteServiceError> {
        if !name.is_valid() {
            return Ok(None);
        }
        Ok(self.backend.get(name.as_str()).await?)
    }

    pub async fn list(&self) -> Result<Vec<Route>, RouteServiceError> {
        Ok(self.backend.get_all().await?)
    }

    /// 创建或覆盖路由，`created_at` 记为当前时间
    pub async fn put(&self, name: &ShortName, url: &str) -> Result<Route, RouteServiceError> {
        Self::check_name(name)?;
        let url = url.trim();
        validate_url(url).map_err(RouteServiceError::InvalidUrl)?;

        let route = Route::new(name.as_str(), url);
        self.backend.put(&route).await?;

        info!("Route stored: {} -> {}", route.name, route.url);
        Ok(route)
    }

    pub async fn delete(&self, name: &ShortName) -> Result<bool, RouteServiceError> {
        if !name.is_valid() {
            return Ok(false);
        }
        let removed = self.backend.delete(name.as_str()).await?;
        if removed {
            info!("Route removed: {}", name);
        }
        Ok(removed)
    }
}
