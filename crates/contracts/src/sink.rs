//! RecordSink trait - Dispatcher output interface
//!
//! Defines the abstract interface for the physical writers behind a channel.

use crate::{FlagSet, FormattedRecord};

/// Record output trait
///
/// Implementations write a pre-formatted record and nothing else: no
/// reformatting, no buffering beyond the call.
pub trait RecordSink: Send + Sync {
    /// Sink name (used for logging/metrics)
    fn name(&self) -> &str;

    /// Write one record
    ///
    /// `flags` are the destination's modifiers; sinks ignore flags that do
    /// not apply to them.
    ///
    /// # Errors
    /// Returns the underlying I/O error; the caller decides whether it is fatal.
    fn write(&self, record: &FormattedRecord, flags: FlagSet) -> std::io::Result<()>;
}
