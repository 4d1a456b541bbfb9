//! 密码处理模块

use bcrypt::{hash_with_salt, Version};
use rand::{rngs::OsRng, RngCore};

use crate::shared::constants::password::SALT_LEN;
use crate::shared::AppResult;

/// 从系统随机源生成一次性盐值
pub fn generate_salt() -> AppResult<[u8; SALT_LEN]> {
    let mut salt = [0u8; SALT_LEN];
    OsRng.try_fill_bytes(&mut salt)?;
    Ok(salt)
}

/// 用给定盐值和工作因子计算 bcrypt 哈希，返回 `$2b$` 编码文本
pub fn hash_password_with_salt(password: &str, cost: u32, salt: [u8; SALT_LEN]) -> AppResult<String> {
    let parts = hash_with_salt(password.as_bytes(), cost, salt)?;
    Ok(parts.format_for_version(Version::TwoB))
}

/// 哈希密码（每次调用使用新盐值）
pub fn hash_password(password: &str, cost: u32) -> AppResult<String> {
    let salt = generate_salt()?;
    hash_password_with_salt(password, cost, salt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::constants::password::ENCODED_HASH_LEN;
    use crate::shared::AppError;

    #[test]
    fn test_generate_salt() {
        let s1 = generate_salt().unwrap();
        let s2 = generate_salt().unwrap();
        assert_ne!(s1, s2); // 应该不同
    }

    #[test]
    fn test_hash_and_verify() {
        let hashed = hash_password("secure_password_123", 4).unwrap();

        assert!(hashed.starts_with("$2b$04$"));
        assert_eq!(hashed.len(), ENCODED_HASH_LEN);
        assert!(bcrypt::verify("secure_password_123", &hashed).unwrap());
        assert!(!bcrypt::verify("wrong-password", &hashed).unwrap());
    }

    #[test]
    fn test_same_password_different_salt() {
        let h1 = hash_password("demo123", 4).unwrap();
        let h2 = hash_password("demo123", 4).unwrap();

        assert_ne!(h1, h2);
        assert!(bcrypt::verify("demo123", &h1).unwrap());
        assert!(bcrypt::verify("demo123", &h2).unwrap());
    }

    #[test]
    fn test_fixed_salt_is_deterministic() {
        let salt = [7u8; SALT_LEN];
        let h1 = hash_password_with_salt("admin", 4, salt).unwrap();
        let h2 = hash_password_with_salt("admin", 4, salt).unwrap();
        assert_eq!(h1, h2);
    }

    #[test]
    fn test_invalid_cost() {
        let err = hash_password("admin", 3).unwrap_err();
        assert!(matches!(err, AppError::Hashing(_)));
        assert!(err.is_crypto());

        assert!(hash_password("admin", 32).is_err());
    }
}
