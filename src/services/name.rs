//! Short name parsing
//!
//! 从请求路径中提取短名称。路由前缀由调用方提供（`/` 或 `/edit/`），
//! 调用方保证只在路由已经匹配该前缀时调用。

use std::borrow::Cow;
use std::fmt;

/// 短名称最大长度（字节）
pub const MAX_NAME_LENGTH: usize = 128;

/// 从请求路径提取出的短名称
///
/// 空字符串是一个独立的哨兵值，表示"没有提供名称"。
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ShortName(String);

impl ShortName {
    pub fn new(name: impl AsRef<str>) -> Self {
        ShortName(clean_name(name.as_ref()))
    }

    pub fn empty() -> Self {
        ShortName(String::new())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// 可以作为路由键保存的名称：非空、不超过 128 字节、
    /// 只包含 ASCII 字母数字和 `-` `_` `.`
    pub fn is_valid(&self) -> bool {
        !self.0.is_empty()
            && self.0.len() <= MAX_NAME_LENGTH
            && self
                .0
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.'))
    }

}

impl fmt::Display for ShortName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ShortName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// 去掉前后空白和 `/`
pub fn clean_name(name: &str) -> String {
    name.trim().trim_matches('/').to_string()
}

/// 请求路径百分号解码，解码结果不是合法 UTF-8 时保留原路径
pub fn decode_path(path: &str) -> Cow<'_, str> {
    urlencoding::decode(path).unwrap_or(Cow::Borrowed(path))
}

/// 去掉路由前缀，返回清理后的短名称
///
/// `parse_name("/", "/")` 返回空名称。路径不以前缀开头时同样返回空名称。
pub fn parse_name(prefix: &str, path: &str) -> ShortName {
    match path.strip_prefix(prefix) {
        Some(rest) => ShortName::new(rest),
        None => ShortName::empty(),
    }
}
