//! 认证模块
//!
//! 提供加盐的 bcrypt 密码哈希

pub mod password;

pub use password::{generate_salt, hash_password, hash_password_with_salt};
