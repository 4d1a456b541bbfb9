//! 凭据哈希生成工具
//!
//! 为固定的用户名/密码集合批量生成加盐的 bcrypt 哈希，基于分层结构设计

// 核心模块
pub mod shared;          // 共享模块（错误处理、类型定义、常量）
pub mod infrastructure;  // 基础设施层（配置）
pub mod business;        // 业务逻辑层（哈希输出服务）
pub mod auth;            // 密码哈希原语

// 重新导出核心类型
pub use infrastructure::Config;
pub use shared::{AppError, AppResult, Credential, HashedCredential};
pub use business::services::HashEmitter;
