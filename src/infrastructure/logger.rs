//! 日志基础设施

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

pub struct Logger;

impl Logger {
    /// 初始化全局日志订阅器
    ///
    /// 设置了 `RUST_LOG` 时以环境变量为准，否则使用配置中的级别。
    pub fn init(level: &str) -> Result<()> {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .try_init()
            .map_err(|e| anyhow!("日志初始化失败: {}", e))
    }
}
