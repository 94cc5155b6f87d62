//! Log sink helpers for logger adapters.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

/// A sink that receives pre-formatted log lines.
///
/// Write failures are the sink's concern; they are never reported back to
/// the caller emitting the record.
pub trait LogSink: Send + Sync {
    /// Write a line to the sink.
    fn write_line(&self, line: &str);

    /// Flush anything buffered. Called before the process exits on a fatal record.
    fn flush(&self) {}
}

/// Log sink that writes to stderr.
///
/// The first failed write is reported on stderr; later failures are silent.
#[derive(Debug, Default)]
pub struct StderrLogSink {
    failure_reported: AtomicBool,
}

impl StderrLogSink {
    /// Create a stderr sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl LogSink for StderrLogSink {
    fn write_line(&self, line: &str) {
        let mut stderr = std::io::stderr().lock();
        if let Err(error) = stderr.write_all(line.as_bytes()) {
            if !self.failure_reported.swap(true, Ordering::Relaxed) {
                eprintln!("log sink write failed: {error}");
            }
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Log sink that keeps lines in memory, for tests and captures.
#[derive(Debug, Default)]
pub struct MemoryLogSink {
    lines: Mutex<Vec<String>>,
}

impl MemoryLogSink {
    /// Create an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain and return the captured lines.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.guard())
    }

    /// Copy of the captured lines, leaving them in place.
    pub fn lines(&self) -> Vec<String> {
        self.guard().clone()
    }

    fn guard(&self) -> MutexGuard<'_, Vec<String>> {
        self.lines
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl LogSink for MemoryLogSink {
    fn write_line(&self, line: &str) {
        self.guard().push(line.to_string());
    }
}
