//! Reserved names
//!
//! 系统路由占用的名称，永远不能被当作短链接。必须包含编辑路由自身的
//! 名称 `edit`，否则默认路由与编辑路由之间会来回重定向。

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// 系统路由占用的名称
pub const RESERVED_NAMES: &[&str] = &["admin", "api", "edit", "healthz", "links", "s", "version"];

static BANNED: Lazy<BanSet> = Lazy::new(BanSet::default);

/// 不可变的保留名称集合
#[derive(Debug, Clone)]
pub struct BanSet {
    names: HashSet<&'static str>,
}

impl BanSet {
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }
}

impl Default for BanSet {
    fn default() -> Self {
        Self {
            names: RESERVED_NAMES.iter().copied().collect(),
        }
    }
}

/// 查询进程级保留名称集合，集合在首次访问时构造
pub fn is_banned_name(name: &str) -> bool {
    BANNED.contains(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_reserved_name_is_banned() {
        for name in RESERVED_NAMES {
            assert!(is_banned_name(name), "{} should be banned", name);
        }
    }

    #[test]
    fn test_edit_token_is_banned() {
        assert!(is_banned_name("edit"));
    }

    #[test]
    fn test_regular_names_are_allowed() {
        assert!(!is_banned_name("foo"));
        assert!(!is_banned_name(""));
        assert!(!is_banned_name("API"));
        assert!(!is_banned_name("edits"));
    }
}
