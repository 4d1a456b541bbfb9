//! 常量定义模块

/// 密码哈希相关常量
pub mod password {
    /// bcrypt 工作因子，迭代 2^10 轮
    pub const HASH_COST: u32 = 10;
    pub const SALT_LEN: usize = 16;
    /// `$2b$10$` 前缀 + 22位盐值 + 31位摘要
    pub const ENCODED_HASH_LEN: usize = 60;
}

/// 日志相关常量
pub mod logging {
    pub const DEFAULT_FILTER: &str = "credential_hasher=info";
}
