//! Process-wide dispatcher
//!
//! Backs the [`clog!`](crate::clog) macro so callers can log without
//! threading a dispatcher through every call. The slot holds an immutable
//! [`Dispatcher`]; overriding the log target swaps in a retargeted one, so a
//! dispatch already in flight keeps the target it started with.

use std::path::PathBuf;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use tracing::debug;

use crate::dispatcher::Dispatcher;

static GLOBAL: OnceLock<RwLock<Arc<Dispatcher>>> = OnceLock::new();

fn slot() -> &'static RwLock<Arc<Dispatcher>> {
    GLOBAL.get_or_init(|| RwLock::new(Arc::new(Dispatcher::default())))
}

/// The current process-wide dispatcher
pub fn dispatcher() -> Arc<Dispatcher> {
    Arc::clone(&slot().read().unwrap_or_else(PoisonError::into_inner))
}

/// Replace the process-wide dispatcher
pub fn install(dispatcher: Dispatcher) {
    debug!(target_path = %dispatcher.target_path().display(), "Installing global dispatcher");
    *slot().write().unwrap_or_else(PoisonError::into_inner) = Arc::new(dispatcher);
}

/// Point the process-wide dispatcher's `LogFile` channel at `path`.
///
/// Affects every subsequent dispatch through the global dispatcher.
pub fn set_log_target_path(path: impl Into<PathBuf>) {
    let mut current = slot().write().unwrap_or_else(PoisonError::into_inner);
    let next = current.retarget(path);
    debug!(target_path = %next.target_path().display(), "Global log target changed");
    *current = Arc::new(next);
}

/// Target of the process-wide dispatcher's `LogFile` channel
pub fn log_target_path() -> PathBuf {
    dispatcher().target_path().to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatcher::{DispatcherConfig, DEFAULT_TARGET_PATH};
    use contracts::Channel;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    // The global slot is shared by every test in this binary, so all global
    // assertions live in one test.
    #[test]
    fn test_global_target_lifecycle() {
        assert_eq!(
            Dispatcher::default().target_path(),
            Path::new(DEFAULT_TARGET_PATH)
        );

        let dir = tempdir().unwrap();
        let first = dir.path().join("first.txt");
        let second = dir.path().join("second.txt");

        install(Dispatcher::new(DispatcherConfig {
            target_path: first.clone(),
            ..DispatcherConfig::default()
        }));
        assert_eq!(log_target_path(), first);

        crate::clog!("to first", Channel::LogFile);
        set_log_target_path(&second);
        assert_eq!(log_target_path(), second);
        crate::clog!("to second", Channel::LogFile);

        let first_contents = fs::read_to_string(&first).unwrap();
        let second_contents = fs::read_to_string(&second).unwrap();
        assert!(first_contents.ends_with(": to first\n\n"));
        assert!(!first_contents.contains("to second"));
        assert!(second_contents.ends_with(": to second\n\n"));
        assert!(second_contents.contains("test_global_target_lifecycle: to second"));
        assert_eq!(dispatcher().records_dispatched(), 2);

        install(Dispatcher::default());
    }
}
