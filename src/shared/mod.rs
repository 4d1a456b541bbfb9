//! 共享模块
//!
//! 包含跨层共享的类型、错误处理、常量

pub mod error;
pub mod types;
pub mod constants;

// 重新导出常用类型
pub use error::{AppError, AppResult};
pub use types::{Credential, HashedCredential};
