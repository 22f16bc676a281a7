use async_trait::async_trait;

use super::Route;
use crate::errors::Result;

/// 存储后端契约
///
/// 重定向核心只通过这个 trait 读取路由，不关心具体存储引擎。
/// "不存在" 用 `Ok(None)` 表示，与真正的存储错误区分开。
/// 调用方丢弃返回的 future 即取消查询，实现不得依赖被 poll 到结束。
#[async_trait]
pub trait Backend: Send + Sync {
    /// 按名称查询路由
    async fn get(&self, name: &str) -> Result<Option<Route>>;

    /// 返回全部路由，按名称排序
    async fn get_all(&self) -> Result<Vec<Route>>;

    /// 插入或覆盖路由
    async fn put(&self, route: &Route) -> Result<()>;

    /// 删除路由，返回是否确实删除了记录
    async fn delete(&self, name: &str) -> Result<bool>;

    /// 路由数量（健康检查用）
    async fn count(&self) -> Result<usize> {
        Ok(self.get_all().await?.len())
    }

    fn backend_name(&self) -> &str;
}
