//! # Logger Factory
//!
//! Builds structured JSON line loggers from a small configuration object.
//!
//! ## Features
//!
//! - **Config driven**: format, minimum level and logo flag, loadable from TOML
//! - **Fixed schema**: every record carries `level`, `time`, `caller` and `msg`
//! - **Thread safe**: records from concurrent callers never interleave
//! - **Default output**: stdout plus an append-mode log file
//!
//! ```
//! use logger_factory::{Config, LogContext, LogLevel};
//!
//! let logger = Config::new()
//!     .with_level(LogLevel::Info)
//!     .build(std::io::stdout())
//!     .unwrap();
//!
//! logger.info_with_context("server started", LogContext::new().with_field("port", 8080));
//! ```

pub mod config;
pub mod core;
pub mod factory;
pub mod macros;

pub mod prelude {
    pub use crate::config::Config;
    pub use crate::core::{
        Caller, FanOutWriter, FieldValue, LevelEnabler, LogContext, LogEntry, LogLevel, Logger,
        LoggerError, Result,
    };
    pub use crate::factory::{build_default, build_default_or_exit};
}

pub use crate::config::Config;
pub use crate::core::{
    Caller, FanOutWriter, FieldValue, LevelEnabler, LogContext, LogEntry, LogLevel, Logger,
    LoggerError, Result,
};
pub use crate::factory::{build_default, build_default_or_exit};
