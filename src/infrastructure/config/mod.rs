use crate::shared::constants::password::HASH_COST;
use crate::shared::Credential;

/// 哈希任务配置：工作因子 + 有序的凭据列表
#[derive(Debug, Clone)]
pub struct Config {
    pub cost: u32,
    pub credentials: Vec<Credential>,
}

impl Config {
    pub fn new(cost: u32, credentials: Vec<Credential>) -> Self {
        Self { cost, credentials }
    }

    /// 内置的固定凭据集，cost 固定为 10
    ///
    /// 不读取环境变量或命令行参数
    pub fn builtin() -> Self {
        Self::new(
            HASH_COST,
            vec![
                Credential::new("admin", "admin"),
                Credential::new("demo", "demo123"),
                Credential::new("test", "test123"),
            ],
        )
    }
}
