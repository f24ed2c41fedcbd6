//! # chanlog CLI
//!
//! 命令行接口入口点。
//!
//! 提供：
//! - 消息分发到 profile 或显式通道
//! - 仅格式化记录（不写入）
//! - 配置校验与 profile 列表

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use cli::{Cli, Commands};
use commands::{run_format, run_log, run_profiles, run_validate};
use observability::ObservabilityConfig;

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Initialize diagnostics based on CLI options
    init_logging(&cli)?;

    debug!(version = env!("CARGO_PKG_VERSION"), "chanlog starting");

    // Execute command
    let result = match &cli.command {
        Commands::Log(args) => run_log(args),
        Commands::Format(args) => run_format(args),
        Commands::Validate(args) => run_validate(args),
        Commands::Profiles(args) => run_profiles(args),
    };

    if let Err(ref e) = result {
        tracing::error!(error = %e, "Command failed");
    }

    result
}

/// Initialize diagnostics based on CLI options
fn init_logging(cli: &Cli) -> Result<()> {
    let default_log_level = if cli.quiet {
        "error"
    } else {
        match cli.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    observability::init_with_config(ObservabilityConfig {
        log_format: cli.log_format.into(),
        default_log_level: default_log_level.to_string(),
    })
}
