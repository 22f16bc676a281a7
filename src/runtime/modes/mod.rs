//! Mode routing
//!
//! 目前只有 HTTP 服务模式；`config` 子命令在 main 中直接处理。

pub mod server;

pub use server::run_server;
