//! Output destinations
//!
//! - [`LockedWriter`]: serializes writers so records never interleave
//! - [`FanOutWriter`]: duplicates every write to several destinations
//! - [`open_log_file`]: opens the default log file in append mode

use super::error::{LoggerError, Result};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// Permission bits for newly created log files (before umask)
pub const LOG_FILE_MODE: u32 = 0o666;

/// A writer guarded by a mutex
///
/// Each call to [`LockedWriter::write_record`] holds the lock for the whole
/// record, so concurrent callers never produce torn lines.
pub struct LockedWriter {
    inner: Mutex<Box<dyn Write + Send>>,
}

impl LockedWriter {
    pub fn new<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            inner: Mutex::new(Box::new(writer)),
        }
    }

    /// Write one complete record and push it through to the destination
    pub fn write_record(&self, record: &[u8]) -> io::Result<()> {
        let mut writer = self.inner.lock();
        writer.write_all(record)?;
        writer.flush()
    }

    pub fn flush(&self) -> io::Result<()> {
        self.inner.lock().flush()
    }
}

/// Duplicates every write to each destination in order
///
/// A failing destination stops the write and returns its error, leaving the
/// remaining destinations untouched for that write.
pub struct FanOutWriter {
    writers: Vec<Box<dyn Write + Send>>,
}

impl FanOutWriter {
    pub fn new() -> Self {
        Self {
            writers: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_writer<W: Write + Send + 'static>(mut self, writer: W) -> Self {
        self.writers.push(Box::new(writer));
        self
    }

    pub fn len(&self) -> usize {
        self.writers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.writers.is_empty()
    }
}

impl Default for FanOutWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl Write for FanOutWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        for writer in self.writers.iter_mut() {
            writer.write_all(buf)?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        for writer in self.writers.iter_mut() {
            writer.flush()?;
        }
        Ok(())
    }
}

/// Open `path` read-write, creating it if needed, appending every write
pub fn open_log_file(path: impl AsRef<Path>) -> Result<File> {
    let path = path.as_ref();
    let mut options = OpenOptions::new();
    options.read(true).create(true).append(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(LOG_FILE_MODE);
    }

    options
        .open(path)
        .map_err(|e| LoggerError::file_open(path.display().to_string(), e))
}
