use std::io::Write;

use tracing::{debug, error, info};

use crate::auth::password;
use crate::shared::{AppResult, Credential, HashedCredential};

/// 哈希输出服务
/// 按输入顺序为每条凭据生成加盐的 bcrypt 哈希
#[derive(Debug, Clone, Copy)]
pub struct HashEmitter {
    cost: u32,
}

impl HashEmitter {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// 惰性生成 (用户名, 哈希) 序列
    ///
    /// 每条凭据在被拉取时才计算，各自使用独立的随机盐值
    pub fn emit_hashes<'a, I>(&self, entries: I) -> impl Iterator<Item = AppResult<HashedCredential>> + 'a
    where
        I: IntoIterator<Item = &'a Credential> + 'a,
        I::IntoIter: 'a,
    {
        let cost = self.cost;
        entries.into_iter().map(move |credential| {
            debug!(username = credential.username(), cost, "计算密码哈希");
            let hash = password::hash_password(credential.password(), cost)?;
            Ok(HashedCredential {
                username: credential.username().to_string(),
                hash,
            })
        })
    }

    /// 逐行写出 `<username>: <hash>`，返回写出的行数
    ///
    /// 遇到第一个错误立即停止，不重试
    pub fn write_hashes<'a, I, W>(&self, entries: I, out: &mut W) -> AppResult<usize>
    where
        I: IntoIterator<Item = &'a Credential> + 'a,
        I::IntoIter: 'a,
        W: Write,
    {
        info!(cost = self.cost, "🔐 开始生成密码哈希");

        let mut written = 0;
        for hashed in self.emit_hashes(entries) {
            let hashed = match hashed {
                Ok(hashed) => hashed,
                Err(e) => {
                    error!(error_code = e.error_code(), error = %e, "密码哈希失败，终止");
                    return Err(e);
                }
            };
            writeln!(out, "{}", hashed)?;
            written += 1;
        }
        out.flush()?;

        info!(count = written, "✅ 密码哈希生成完成");
        Ok(written)
    }
}
