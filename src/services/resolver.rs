//! Route resolution
//!
//! 把短名称交给存储后端查询，并把结果归类为 找到 / 不存在 / 后端故障。
//! 这里不做重试，后端错误原样交给上层。

use std::time::Duration;

use tokio::time::timeout;
use tracing::{debug, trace};

use super::name::ShortName;
use crate::errors::GolinksError;
use crate::storage::Backend;

/// 单次查询的默认时间预算
pub const DEFAULT_LOOKUP_BUDGET: Duration = Duration::from_secs(60);

#[derive(Debug, Clone)]
pub enum ResolveOutcome {
    Found { target: String },
    NotFound,
    BackendError(GolinksError),
}

impl ResolveOutcome {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ResolveOutcome::NotFound)
    }
}

/// 查询短名称对应的路由
///
/// - 空名称直接返回 `NotFound`，不访问后端
/// - 后端调用受 `budget` 限制，超时视为后端故障
/// - 计时器在任意返回路径上随 future 一起释放；调用方丢弃返回的
///   future 时后端查询也随之取消
pub async fn resolve(backend: &dyn Backend, name: &ShortName, budget: Duration) -> ResolveOutcome {
    if name.is_empty() {
        trace!("Empty name, skipping backend lookup");
        return ResolveOutcome::NotFound;
    }

    match timeout(budget, backend.get(name.as_str())).await {
        Ok(Ok(Some(route))) => {
            trace!("Resolved {} -> {}", name, route.url);
            ResolveOutcome::Found { target: route.url }
        }
        Ok(Ok(None)) => {
            debug!("No route for name: {}", name);
            ResolveOutcome::NotFound
        }
        Ok(Err(e)) => ResolveOutcome::BackendError(e),
        Err(_elapsed) => ResolveOutcome::BackendError(GolinksError::timeout(format!(
            "{} backend did not answer lookup of '{}' within {:?}",
            backend.backend_name(),
            name,
            budget
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryBackend, Route};

    #[tokio::test]
    async fn test_found() {
        let backend = MemoryBackend::with_routes([Route::new("foo", "https://example.com")]);
        let outcome = resolve(&backend, &ShortName::new("foo"), DEFAULT_LOOKUP_BUDGET).await;

        match outcome {
            ResolveOutcome::Found { target } => assert_eq!(target, "https://example.com"),
            other => panic!("expected Found, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_name_is_not_found() {
        let backend = MemoryBackend::new();
        let outcome = resolve(&backend, &ShortName::new("bar"), DEFAULT_LOOKUP_BUDGET).await;
        assert!(outcome.is_not_found());
    }

    #[tokio::test]
    async fn test_empty_name_is_not_found() {
        let backend = MemoryBackend::with_routes([Route::new("", "https://never.example")]);
        let outcome = resolve(&backend, &ShortName::empty(), DEFAULT_LOOKUP_BUDGET).await;
        assert!(outcome.is_not_found());
    }
}
