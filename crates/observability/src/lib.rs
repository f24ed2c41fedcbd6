//! # Observability
//!
//! 可观测性模块：Tracing 诊断输出。
//!
//! ## 功能
//!
//! - Tracing 初始化 (JSON/Pretty/Compact 格式)
//! - 支持 RUST_LOG 环境变量覆盖默认级别
//!
//! 诊断输出与分发器的通道相互独立：这里只记录分发器自身的运行情况，
//! 不会写入日志目标文件。
//!
//! ## 使用示例
//!
//! ```ignore
//! observability::init()?;
//! ```

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// 初始化可观测性（Tracing）
///
/// - Tracing: Compact 格式，支持 RUST_LOG 环境变量
pub fn init() -> Result<()> {
    init_with_config(ObservabilityConfig::default())
}

/// 可观测性配置
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    /// 日志格式
    pub log_format: LogFormat,
    /// 默认日志级别
    pub default_log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_format: LogFormat::Compact,
            default_log_level: "warn".to_string(),
        }
    }
}

/// 日志格式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// JSON 结构化日志
    Json,
    /// 人类可读格式
    Pretty,
    /// 紧凑单行格式
    #[default]
    Compact,
}

/// 根据配置构造过滤器：RUST_LOG 优先
pub fn env_filter(default_log_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_log_level))
}

/// 使用自定义配置初始化
///
/// 诊断写到 stderr；重复初始化返回错误。
pub fn init_with_config(config: ObservabilityConfig) -> Result<()> {
    let filter = env_filter(&config.default_log_level);

    let fmt_layer = match config.log_format {
        LogFormat::Json => fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_ids(true)
            .with_thread_names(true)
            .with_file(true)
            .with_line_number(true)
            .boxed(),
        LogFormat::Pretty => fmt::layer().pretty().with_writer(std::io::stderr).boxed(),
        LogFormat::Compact => fmt::layer().compact().with_writer(std::io::stderr).boxed(),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .context("Failed to initialize tracing subscriber")?;

    tracing::debug!(
        log_format = ?config.log_format,
        default_log_level = %config.default_log_level,
        "Observability initialized"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ObservabilityConfig::default();
        assert_eq!(config.log_format, LogFormat::Compact);
        assert_eq!(config.default_log_level, "warn");
    }

    #[test]
    fn test_init_twice_fails() {
        // 全局 subscriber 只能设置一次
        let _ = init();
        assert!(init().is_err());
    }
}
