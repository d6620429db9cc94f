//! # 内存产品存储服务
//!
//! 通过 HTTP 暴露单个内存产品集合的增删改查：
//! - `app`：产品存储、处理器和 `/note.txt`
//! - `core`：错误响应、访问日志中间件和路由装配
//! - `infrastructure`：配置加载和日志初始化

pub mod app;
pub mod core;
pub mod infrastructure;

pub use app::product::{
    handler::AppState,
    model::{Product, ProductFields},
    service::{IdPolicy, ProductStore, StoreError},
};
pub use crate::core::router::build_router;
