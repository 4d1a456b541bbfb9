//! 共享类型定义

use std::fmt;

use crate::encoding_error;
use crate::shared::error::AppResult;

/// 凭据条目：用户名 + 明文密码，构造后只读
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    username: String,
    password: String,
}

impl Credential {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// 从原始字节构造，任一字段不是有效UTF-8时返回编码错误
    pub fn from_utf8(username: Vec<u8>, password: Vec<u8>) -> AppResult<Self> {
        let username = String::from_utf8(username)
            .map_err(|e| encoding_error!("用户名不是有效的UTF-8: {}", e))?;
        let password = String::from_utf8(password)
            .map_err(|e| encoding_error!("用户 {} 的密码不是有效的UTF-8: {}", username, e.utf8_error()))?;
        Ok(Self { username, password })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

// 密码不能出现在日志或调试输出中
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username)
            .field("password", &"****")
            .finish()
    }
}

/// 哈希结果：用户名 + bcrypt 编码哈希文本
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashedCredential {
    pub username: String,
    pub hash: String,
}

/// 输出行格式 `<username>: <hash>`
impl fmt::Display for HashedCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.username, self.hash)
    }
}
