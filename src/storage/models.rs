use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 持久化的 name → URL 映射
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub name: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

impl Route {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            created_at: Utc::now(),
        }
    }
}
