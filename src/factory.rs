//! Default logger construction: stdout plus a log file

use crate::config::Config;
use crate::core::{open_log_file, FanOutWriter, Logger, LoggerError, Result};
use std::path::Path;

/// Build the default logger, writing every record to stdout and to `log_file`
///
/// The file is created if missing and opened in append mode. Open failures
/// are returned as [`LoggerError::FileOpen`](crate::LoggerError::FileOpen).
///
/// # Example
///
/// ```no_run
/// let logger = logger_factory::build_default("/var/log/app.log").unwrap();
/// logger.info("started");
/// ```
pub fn build_default(log_file: impl AsRef<Path>) -> Result<Logger> {
    let file = open_log_file(log_file)?;
    let writer = FanOutWriter::new()
        .with_writer(std::io::stdout())
        .with_writer(file);

    // The default "auto" format never hits the console rejection
    Config::new().build(writer)
}

/// Like [`build_default`], but a process that cannot open its log file does
/// not start: the error is printed to stderr and the process exits with
/// status 1.
pub fn build_default_or_exit(log_file: impl AsRef<Path>) -> Logger {
    let log_file = log_file.as_ref();
    match build_default(log_file) {
        Ok(logger) => logger,
        Err(e) => {
            eprintln!("{}", exit_message(log_file, &e));
            std::process::exit(1);
        }
    }
}

fn exit_message(log_file: &Path, err: &LoggerError) -> String {
    match err {
        LoggerError::FileOpen { source, .. } => {
            format!("file={} err={}", log_file.display(), source)
        }
        other => format!("file={} err={}", log_file.display(), other),
    }
}
