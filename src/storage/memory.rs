//! In-memory storage backend
//!
//! 基于 DashMap，进程重启后数据丢失。适合开发和测试。

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;

use super::{Backend, Route};
use crate::errors::Result;

#[derive(Default)]
pub struct MemoryBackend {
    routes: DashMap<String, Route>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// 预置路由（测试和演示用）
    pub fn with_routes<I>(routes: I) -> Self
    where
        I: IntoIterator<Item = Route>,
    {
        let backend = Self::new();
        for route in routes {
            backend.routes.insert(route.name.clone(), route);
        }
        backend
    }
}

#[async_trait]
impl Backend for MemoryBackend {
    async fn get(&self, name: &str) -> Result<Option<Route>> {
        Ok(self.routes.get(name).map(|r| r.value().clone()))
    }

    async fn get_all(&self) -> Result<Vec<Route>> {
        let mut routes: Vec<Route> = self.routes.iter().map(|r| r.value().clone()).collect();
        routes.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(routes)
    }

    async fn put(&self, route: &Route) -> Result<()> {
        debug!("Memory backend put: {} -> {}", route.name, route.url);
        self.routes.insert(route.name.clone(), route.clone());
        Ok(())
    }

    async fn delete(&self, name: &str) -> Result<bool> {
        Ok(self.routes.remove(name).is_some())
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.routes.len())
    }

    fn backend_name(&self) -> &str {
        "memory"
    }
}
