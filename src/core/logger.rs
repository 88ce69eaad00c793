//! Logger handle

use super::{
    error::Result,
    log_context::LogContext,
    log_core::Core,
    log_entry::{Caller, LogEntry},
    log_level::LogLevel,
};
use std::panic::Location;
use std::sync::Arc;

/// A structured logger bound to one output
///
/// Cloning is cheap: clones and children created with [`Logger::with`]
/// share the same core, so every record funnels through the one
/// synchronized sink.
#[derive(Clone)]
pub struct Logger {
    core: Arc<Core>,
    format: Arc<str>,
    fields: LogContext,
}

impl Logger {
    pub(crate) fn from_core(core: Core, format: impl Into<Arc<str>>) -> Self {
        Self {
            core: Arc::new(core),
            format: format.into(),
            fields: LogContext::new(),
        }
    }

    /// The resolved format designator this logger was built with
    pub fn format(&self) -> &str {
        &self.format
    }

    /// Fields added to every record written through this handle
    pub fn fields(&self) -> &LogContext {
        &self.fields
    }

    pub fn enabled(&self, level: LogLevel) -> bool {
        self.core.enabled(level)
    }

    /// Create a child logger that adds `context` to every record
    ///
    /// # Example
    ///
    /// ```
    /// use logger_factory::{Config, LogContext};
    ///
    /// let logger = Config::new().build(std::io::sink()).unwrap();
    /// let request_log = logger.with(LogContext::new().with_field("request_id", "abc"));
    /// request_log.info("handled");
    /// ```
    #[must_use]
    pub fn with(&self, context: LogContext) -> Logger {
        let mut fields = self.fields.clone();
        fields.extend(&context);
        Logger {
            core: Arc::clone(&self.core),
            format: Arc::clone(&self.format),
            fields,
        }
    }

    #[track_caller]
    pub fn log(&self, level: LogLevel, message: impl Into<String>) {
        if !self.enabled(level) {
            return;
        }
        self.emit(LogEntry::new(level, message), Location::caller());
    }

    /// Log with structured context fields
    #[track_caller]
    pub fn log_with_context(&self, level: LogLevel, message: impl Into<String>, context: LogContext) {
        if !self.enabled(level) {
            return;
        }
        self.emit(
            LogEntry::new(level, message).with_fields(context),
            Location::caller(),
        );
    }

    fn emit(&self, entry: LogEntry, location: &Location<'_>) {
        let entry = entry.with_caller(Caller::from(location));
        if let Err(e) = self.core.write(&entry, &self.fields) {
            eprintln!("[LOGGER ERROR] Failed to write log entry: {}", e);
        }
    }

    pub fn flush(&self) -> Result<()> {
        self.core.flush()
    }

    #[inline]
    #[track_caller]
    pub fn debug(&self, message: impl Into<String>) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    #[track_caller]
    pub fn info(&self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    #[track_caller]
    pub fn warn(&self, message: impl Into<String>) {
        self.log(LogLevel::Warn, message);
    }

    #[inline]
    #[track_caller]
    pub fn error(&self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    /// Helper for structured info logging
    #[track_caller]
    pub fn info_with_context(&self, message: impl Into<String>, context: LogContext) {
        self.log_with_context(LogLevel::Info, message, context);
    }

    /// Helper for structured error logging
    #[track_caller]
    pub fn error_with_context(&self, message: impl Into<String>, context: LogContext) {
        self.log_with_context(LogLevel::Error, message, context);
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("format", &self.format)
            .field("fields", &self.fields)
            .finish_non_exhaustive()
    }
}
