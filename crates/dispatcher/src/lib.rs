//! # Dispatcher
//!
//! 日志分发模块。
//!
//! 负责：
//! - 每次调用只格式化一次记录 (时间戳 + 调用位置 + 消息)
//! - 将同一记录写入所有选中的通道 (stdout / stderr / 日志文件)
//! - 汇总失败通道，绝不中断调用方

pub mod clock;
pub mod dispatcher;
pub mod error;
pub mod format;
pub mod global;
pub mod locks;
mod macros;
pub mod metrics;
pub mod sinks;

pub use contracts;
pub use contracts::{
    CallSite, Channel, ChannelProfile, ChannelSet, Destination, Flag, FlagSet, FormatKind,
    FormattedRecord, RecordSink,
};
pub use clock::{Clock, FixedClock, SystemClock};
pub use dispatcher::{Dispatcher, DispatcherBuilder, DispatcherConfig, DEFAULT_TARGET_PATH};
pub use error::{ChannelFailure, DispatchError};
pub use metrics::{DispatchMetrics, MetricsSnapshot, SinkMetrics};
pub use sinks::{ConsoleSink, ConsoleStream, FileSink};
