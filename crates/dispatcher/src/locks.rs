//! Per-target write serialization
//!
//! One mutex per absolutized target path. Serializing dispatchers share the
//! process-wide registry from [`PathLocks::global`], so two dispatchers built
//! independently for the same file still take turns.
//!
//! [`FileSink`]: crate::sinks::FileSink

use std::collections::HashMap;
use std::path::{self, Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

/// Registry of mutexes keyed by resolved file path
#[derive(Debug, Default)]
pub struct PathLocks {
    entries: Mutex<HashMap<PathBuf, Arc<Mutex<()>>>>,
}

static GLOBAL_LOCKS: OnceLock<Arc<PathLocks>> = OnceLock::new();

impl PathLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry shared by every serializing [`FileSink`] in the process
    ///
    /// [`FileSink`]: crate::sinks::FileSink
    pub fn global() -> Arc<PathLocks> {
        Arc::clone(GLOBAL_LOCKS.get_or_init(|| Arc::new(PathLocks::new())))
    }

    /// Mutex guarding writes to `path`
    ///
    /// Relative paths are resolved against the current directory, so two
    /// spellings of the same location share one mutex.
    pub fn lock_for(&self, path: &Path) -> Arc<Mutex<()>> {
        let key = path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(entries.entry(key).or_default())
    }

    /// Number of distinct targets seen
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
