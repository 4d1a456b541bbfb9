//! 基础设施层模块
//!
//! 负责配置管理

pub mod config;

pub use config::Config;
