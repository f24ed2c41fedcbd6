//! Dispatcher error types

use contracts::Channel;
use thiserror::Error;

/// A single channel that could not be written
#[derive(Debug, Error)]
#[error("channel {channel} (sink '{sink}'): {source}")]
pub struct ChannelFailure {
    /// Channel whose write failed
    pub channel: Channel,
    /// Name of the sink behind the channel
    pub sink: String,
    /// Underlying I/O error
    #[source]
    pub source: std::io::Error,
}

/// Partial failure of a dispatch.
///
/// Every selected channel was attempted; `failures` lists the ones that did
/// not complete.
#[derive(Debug, Error)]
#[error("{} of {} channel write(s) failed", .failures.len(), .attempted)]
pub struct DispatchError {
    attempted: usize,
    failures: Vec<ChannelFailure>,
}

impl DispatchError {
    pub(crate) fn new(attempted: usize, failures: Vec<ChannelFailure>) -> Self {
        Self {
            attempted,
            failures,
        }
    }

    /// Number of channels the dispatch tried to write
    pub fn attempted(&self) -> usize {
        self.attempted
    }

    pub fn failures(&self) -> &[ChannelFailure] {
        &self.failures
    }

    /// Whether `channel` is among the failed channels
    pub fn failed(&self, channel: Channel) -> bool {
        self.failures.iter().any(|f| f.channel == channel)
    }

    pub fn into_failures(self) -> Vec<ChannelFailure> {
        self.failures
    }
}
