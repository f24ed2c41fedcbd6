//! FileSink - appends or overwrites the log target file

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError};

use contracts::{Flag, FlagSet, FormattedRecord, RecordSink};
use tracing::trace;

use crate::locks::PathLocks;

/// Sink that writes records to one file.
///
/// The file is opened and closed per record: appending (created if absent)
/// by default, truncated when the destination carries
/// [`Flag::ForceOverwrite`].
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
    locks: Option<Arc<PathLocks>>,
}

impl FileSink {
    /// Create a FileSink without cross-call serialization
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            locks: None,
        }
    }

    /// Create a FileSink serialized through the process-wide registry
    pub fn serialized(path: impl Into<PathBuf>) -> Self {
        Self::with_locks(path, PathLocks::global())
    }

    /// Create a FileSink that serializes writes through `locks`
    pub fn with_locks(path: impl Into<PathBuf>, locks: Arc<PathLocks>) -> Self {
        Self {
            path: path.into(),
            locks: Some(locks),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Same sink settings, different target
    pub fn retarget(&self, path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            locks: self.locks.clone(),
        }
    }

    fn open(&self, flags: FlagSet) -> io::Result<File> {
        let mut options = OpenOptions::new();
        if flags.contains(Flag::ForceOverwrite) {
            options.write(true).truncate(true);
        } else {
            options.append(true);
        }
        options.create(true).open(&self.path)
    }

    fn write_record(&self, record: &FormattedRecord, flags: FlagSet) -> io::Result<()> {
        let mut file = self.open(flags)?;
        file.write_all(record.as_bytes())?;
        file.flush()
    }
}

impl RecordSink for FileSink {
    fn name(&self) -> &str {
        "log_file"
    }

    fn write(&self, record: &FormattedRecord, flags: FlagSet) -> io::Result<()> {
        trace!(path = %self.path.display(), bytes = record.len(), "Writing record to file");
        match &self.locks {
            Some(locks) => {
                let lock = locks.lock_for(&self.path);
                let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);
                self.write_record(record, flags)
            }
            None => self.write_record(record, flags),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn record(text: &str) -> FormattedRecord {
        FormattedRecord::from_rendered(text.to_string())
    }

    #[test]
    fn test_append_creates_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("t.txt");
        let sink = FileSink::new(&path);

        sink.write(&record("first\n\n"), FlagSet::EMPTY).unwrap();
        sink.write(&record("second\n\n"), FlagSet::EMPTY).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "first\n\nsecond\n\n");
    }

    #[test]
    fn test_force_overwrite_truncates() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("t.txt");
        let sink = FileSink::new(&path);
        let overwrite = FlagSet::from(Flag::ForceOverwrite);

        sink.write(&record("a much longer first record\n\n"), overwrite)
            .unwrap();
        sink.write(&record("second\n\n"), overwrite).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second\n\n");
    }

    #[test]
    fn test_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let sink = FileSink::new(dir.path().join("missing").join("t.txt"));
        let err = sink.write(&record("x\n\n"), FlagSet::EMPTY).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_serialized_sinks_share_global_locks() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("shared.txt");
        let a = FileSink::serialized(&path);
        let b = FileSink::serialized(&path);

        let (Some(a_locks), Some(b_locks)) = (&a.locks, &b.locks) else {
            panic!("serialized sinks must carry locks");
        };
        assert!(Arc::ptr_eq(a_locks, b_locks));
        assert!(Arc::ptr_eq(&a_locks.lock_for(&path), &b_locks.lock_for(&path)));
    }

    #[test]
    fn test_retarget_keeps_locks() {
        let dir = tempdir().unwrap();
        let locks = Arc::new(PathLocks::new());
        let sink = FileSink::with_locks(dir.path().join("a.txt"), Arc::clone(&locks));
        let other = sink.retarget(dir.path().join("b.txt"));

        sink.write(&record("a\n\n"), FlagSet::EMPTY).unwrap();
        other.write(&record("b\n\n"), FlagSet::EMPTY).unwrap();

        assert_eq!(other.path(), dir.path().join("b.txt"));
        assert_eq!(locks.len(), 2);
        assert_eq!(fs::read_to_string(dir.path().join("a.txt")).unwrap(), "a\n\n");
    }
}
