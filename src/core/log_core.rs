//! The assembled core behind every logger handle

use super::encoder::Encoder;
use super::error::Result;
use super::level_enabler::LevelEnabler;
use super::log_context::LogContext;
use super::log_entry::LogEntry;
use super::log_level::LogLevel;
use super::sink::LockedWriter;

/// Encoder, synchronized sink and level predicate bound together
pub struct Core {
    encoder: Box<dyn Encoder>,
    sink: LockedWriter,
    enabler: Box<dyn LevelEnabler>,
}

impl Core {
    pub fn new(
        encoder: impl Encoder + 'static,
        sink: LockedWriter,
        enabler: impl LevelEnabler + 'static,
    ) -> Self {
        Self {
            encoder: Box::new(encoder),
            sink,
            enabler: Box::new(enabler),
        }
    }

    pub fn enabled(&self, level: LogLevel) -> bool {
        self.enabler.enabled(level)
    }

    /// Encode and write one record. Level filtering is the caller's job.
    pub fn write(&self, entry: &LogEntry, fields: &LogContext) -> Result<()> {
        let record = self.encoder.encode(entry, fields)?;
        self.sink.write_record(&record)?;
        Ok(())
    }

    pub fn flush(&self) -> Result<()> {
        self.sink.flush()?;
        Ok(())
    }
}
