//! golinks - a go-links style URL shortener
//!
//! `GET /<name>` 重定向到保存的目标地址；名称不存在时跳到 `/edit/<name>`
//! 的编辑页，编辑页通过 `/api/url/<name>` 保存路由。
//!
//! # Architecture
//! - `services`: 名称解析、保留名称、查询超时和重定向决策
//! - `storage`: 存储后端（内存 / SQLite / MySQL / PostgreSQL）
//! - `api`: HTTP 路由和中间件
//! - `config`: 配置加载（TOML + 环境变量）
//! - `runtime`: 服务启动与关闭
//! - `system`: 日志

pub mod api;
pub mod config;
pub mod errors;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod system;
pub mod utils;
