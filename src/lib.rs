//! # 用户管理 REST 服务
//!
//! 在进程内存中维护一个有序的用户集合，提供列表、创建、更新、删除四个操作：
//! - `app`: 用户模型、存储与处理器
//! - `core`: 错误、响应包装与中间件
//! - `infrastructure`: 日志
//! - `config`: TOML 配置
//! - `router`: 路由与中间件组装

pub mod app;
pub mod config;
pub mod core;
pub mod infrastructure;
pub mod router;

pub use app::user::{Addressing, AppState, User, UserStore};
pub use config::Config;
pub use router::build_router;
