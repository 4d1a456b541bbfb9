//! 统一错误处理模块
//!
//! 定义系统中所有错误类型。所有错误都是致命的，不做本地恢复，直接传播到进程边界

use thiserror::Error;

/// 应用程序统一错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 凭据无法表示为UTF-8文本
    #[error("编码错误: {0}")]
    Encoding(String),

    /// bcrypt 哈希原语内部错误（如无效的cost参数）
    #[error("密码哈希失败: {0}")]
    Hashing(#[from] bcrypt::BcryptError),

    /// 系统随机源不可用，无法生成盐值
    #[error("随机数生成失败: {0}")]
    Entropy(#[from] rand::Error),

    /// 输出写入失败
    #[error("输出错误: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// 获取错误代码
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Encoding(_) => "ENCODING_ERROR",
            AppError::Hashing(_) | AppError::Entropy(_) => "CRYPTO_ERROR",
            AppError::Io(_) => "IO_ERROR",
        }
    }

    /// 是否来自底层加密库（哈希或盐值生成）
    pub fn is_crypto(&self) -> bool {
        self.error_code() == "CRYPTO_ERROR"
    }
}

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;

/// 编码错误构造宏
#[macro_export]
macro_rules! encoding_error {
    ($msg:expr) => {
        $crate::shared::error::AppError::Encoding($msg.to_string())
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::shared::error::AppError::Encoding(format!($fmt, $($arg)*))
    };
}
