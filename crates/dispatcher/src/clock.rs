//! Wall-clock source for record timestamps

use chrono::{DateTime, Local};

/// Source of the timestamp stamped on each record
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

/// The system's local wall clock
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// A clock frozen at one instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(DateTime<Local>);

impl FixedClock {
    pub fn new(at: DateTime<Local>) -> Self {
        Self(at)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}
