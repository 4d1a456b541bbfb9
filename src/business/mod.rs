//! 业务逻辑层模块
//!
//! 包含哈希生成服务

pub mod services;

pub use services::*;
