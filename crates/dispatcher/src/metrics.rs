//! Dispatch metrics for observability

use std::sync::atomic::{AtomicU64, Ordering};

use contracts::Channel;

/// Metrics for a single channel
#[derive(Debug, Default)]
pub struct SinkMetrics {
    /// Total successful writes
    write_count: AtomicU64,
    /// Total write failures
    failure_count: AtomicU64,
    /// Total bytes written successfully
    bytes_written: AtomicU64,
}

impl SinkMetrics {
    /// Create new metrics instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Get total write count
    pub fn write_count(&self) -> u64 {
        self.write_count.load(Ordering::Relaxed)
    }

    /// Record a successful write of `bytes`
    pub fn record_write(&self, bytes: usize) {
        self.write_count.fetch_add(1, Ordering::Relaxed);
        self.bytes_written.fetch_add(bytes as u64, Ordering::Relaxed);
    }

    /// Get failure count
    pub fn failure_count(&self) -> u64 {
        self.failure_count.load(Ordering::Relaxed)
    }

    /// Increment failure count
    pub fn inc_failure_count(&self) {
        self.failure_count.fetch_add(1, Ordering::Relaxed);
    }

    /// Get bytes written
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written.load(Ordering::Relaxed)
    }

    /// Get snapshot of all metrics
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            write_count: self.write_count(),
            failure_count: self.failure_count(),
            bytes_written: self.bytes_written(),
        }
    }
}

/// Snapshot of sink metrics (for reporting)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub write_count: u64,
    pub failure_count: u64,
    pub bytes_written: u64,
}

/// Metrics shared by a dispatcher and everything retargeted from it
#[derive(Debug, Default)]
pub struct DispatchMetrics {
    /// Records formatted and routed (empty destinations excluded)
    records: AtomicU64,
    channels: [SinkMetrics; Channel::COUNT],
}

impl DispatchMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> u64 {
        self.records.load(Ordering::Relaxed)
    }

    pub fn inc_records(&self) {
        self.records.fetch_add(1, Ordering::Relaxed);
    }

    pub fn channel(&self, channel: Channel) -> &SinkMetrics {
        &self.channels[channel.index()]
    }

    /// Per-channel snapshots in channel declaration order
    pub fn snapshot(&self) -> Vec<(Channel, MetricsSnapshot)> {
        Channel::ALL
            .iter()
            .map(|channel| (*channel, self.channel(*channel).snapshot()))
            .collect()
    }
}
