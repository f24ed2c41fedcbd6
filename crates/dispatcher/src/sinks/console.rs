//! ConsoleSink - writes records to stdout or stderr

use std::io::{self, Write};

use contracts::{FlagSet, FormattedRecord, RecordSink};

/// Standard stream a [`ConsoleSink`] writes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleStream {
    Stdout,
    Stderr,
}

/// Sink that writes records to a standard stream
#[derive(Debug, Clone, Copy)]
pub struct ConsoleSink {
    stream: ConsoleStream,
}

impl ConsoleSink {
    pub fn stdout() -> Self {
        Self {
            stream: ConsoleStream::Stdout,
        }
    }

    pub fn stderr() -> Self {
        Self {
            stream: ConsoleStream::Stderr,
        }
    }

    pub fn stream(&self) -> ConsoleStream {
        self.stream
    }
}

impl RecordSink for ConsoleSink {
    fn name(&self) -> &str {
        match self.stream {
            ConsoleStream::Stdout => "stdout",
            ConsoleStream::Stderr => "stderr",
        }
    }

    // The stream lock is held for the whole record so concurrent records
    // never interleave.
    fn write(&self, record: &FormattedRecord, _flags: FlagSet) -> io::Result<()> {
        match self.stream {
            ConsoleStream::Stdout => {
                let mut out = io::stdout().lock();
                out.write_all(record.as_bytes())?;
                out.flush()
            }
            ConsoleStream::Stderr => {
                let mut err = io::stderr().lock();
                err.write_all(record.as_bytes())?;
                err.flush()
            }
        }
    }
}
