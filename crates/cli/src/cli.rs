//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use contracts::Channel;

/// chanlog - Multi-channel logging dispatcher
#[derive(Parser, Debug)]
#[command(
    name = "chanlog",
    author,
    version,
    about = "Multi-channel logging dispatcher",
    long_about = "Formats a message with timestamp and call-site metadata and writes the \n\
                  same record to stdout, stderr and/or an append/overwrite log file."
)]
pub struct Cli {
    /// Increase diagnostic verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true, env = "CHANLOG_VERBOSE")]
    pub verbose: u8,

    /// Suppress all diagnostics except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Diagnostic output format
    #[arg(
        long,
        value_enum,
        default_value = "compact",
        global = true,
        env = "CHANLOG_LOG_FORMAT"
    )]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Dispatch a message to a profile or to explicit channels
    Log(LogArgs),

    /// Print the formatted record without writing it anywhere
    Format(FormatArgs),

    /// Validate configuration file
    Validate(ValidateArgs),

    /// List the channel profiles available to `log --profile`
    Profiles(ProfilesArgs),
}

/// Configuration source shared by commands that build a dispatcher
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    /// Path to configuration file (TOML or JSON); built-in defaults if omitted
    #[arg(short, long, env = "CHANLOG_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the log target file from configuration
    #[arg(short, long, env = "CHANLOG_TARGET")]
    pub target: Option<PathBuf>,
}

/// Arguments for the `log` command
#[derive(Parser, Debug, Clone)]
pub struct LogArgs {
    /// Message to log
    pub message: String,

    /// Named channel profile (defaults to the configured default profile)
    #[arg(short, long, conflicts_with = "channel")]
    pub profile: Option<String>,

    /// Explicit channel; repeat to select several
    #[arg(long, value_enum)]
    pub channel: Vec<ChannelArg>,

    /// Truncate the log file instead of appending
    #[arg(long)]
    pub overwrite: bool,

    #[command(flatten)]
    pub config: ConfigArgs,
}

/// Arguments for the `format` command
#[derive(Parser, Debug, Clone)]
pub struct FormatArgs {
    /// Message to format
    pub message: String,

    /// Record layout
    #[arg(long, default_value = "error")]
    pub kind: String,

    #[command(flatten)]
    pub config: ConfigArgs,
}

/// Arguments for the `validate` command
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Path to configuration file to validate
    #[arg(short, long, default_value = "chanlog.toml")]
    pub config: PathBuf,

    /// Output validation result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `profiles` command
#[derive(Parser, Debug)]
pub struct ProfilesArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Output channel selectable on the command line
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChannelArg {
    /// Standard output
    Out,
    /// Standard error
    Err,
    /// Log target file
    File,
}

impl From<ChannelArg> for Channel {
    fn from(arg: ChannelArg) -> Self {
        match arg {
            ChannelArg::Out => Channel::ConsoleOut,
            ChannelArg::Err => Channel::ConsoleErr,
            ChannelArg::File => Channel::LogFile,
        }
    }
}

/// Diagnostic output format
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum LogFormat {
    /// JSON structured logging
    Json,
    /// Human-readable pretty format
    Pretty,
    /// Compact single-line format
    #[default]
    Compact,
}

impl From<LogFormat> for observability::LogFormat {
    fn from(format: LogFormat) -> Self {
        match format {
            LogFormat::Json => observability::LogFormat::Json,
            LogFormat::Pretty => observability::LogFormat::Pretty,
            LogFormat::Compact => observability::LogFormat::Compact,
        }
    }
}
