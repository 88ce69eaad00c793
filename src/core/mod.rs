//! Core logger types and traits

pub mod encoder;
pub mod error;
pub mod format;
pub mod level_enabler;
pub mod log_context;
pub mod log_core;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod sink;
pub mod timestamp;

pub use encoder::{Encoder, EncoderConfig, JsonEncoder, SHADOWED_FIELD_PREFIX};
pub use error::{LoggerError, Result};
pub use format::{resolve as resolve_format, DEFAULT_FORMAT};
pub use level_enabler::LevelEnabler;
pub use log_context::{FieldValue, LogContext};
pub use log_core::Core;
pub use log_entry::{Caller, LogEntry};
pub use log_level::LogLevel;
pub use logger::Logger;
pub use sink::{open_log_file, FanOutWriter, LockedWriter, LOG_FILE_MODE};
pub use timestamp::rfc3339_nano;
