//! 凭据哈希生成工具主入口
//!
//! 哈希行写到标准输出，日志写到标准错误

use std::io;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use credential_hasher::shared::constants::logging::DEFAULT_FILTER;
use credential_hasher::{Config, HashEmitter};

fn main() -> anyhow::Result<()> {
    // 初始化日志 - 输出到stderr，避免混入哈希结果
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::builtin();
    info!(entries = config.credentials.len(), cost = config.cost, "✅ 配置加载成功");

    let emitter = HashEmitter::new(config.cost);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    emitter.write_hashes(&config.credentials, &mut out)?;

    Ok(())
}
