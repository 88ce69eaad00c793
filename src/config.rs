//! Logger configuration
//!
//! [`Config`] is the settings block a host application embeds in its own
//! TOML configuration:
//!
//! ```toml
//! format = "auto"
//! level = "info"
//! suppress-logo = true
//! ```
//!
//! [`Config::build`] turns it into a [`Logger`] bound to a writer.

use crate::core::{
    format, Core, EncoderConfig, JsonEncoder, LevelEnabler, LockedWriter, LogLevel, Logger,
    LoggerError, Result,
};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output format designator: `"auto"`, `""`, `"logfmt"`, anything else.
    /// `"console"` is rejected by [`Config::build`].
    pub format: String,

    /// Minimum level written
    pub level: LogLevel,

    /// Carried for the startup banner printer; the logger never reads it
    #[serde(rename = "suppress-logo")]
    pub suppress_logo: bool,
}

impl Config {
    /// Defaults: `auto` format, every level enabled, logo shown
    #[must_use]
    pub fn new() -> Self {
        Self {
            format: format::AUTO_FORMAT.to_string(),
            level: LogLevel::Debug,
            suppress_logo: false,
        }
    }

    /// Parse a TOML settings block, filling in defaults for missing keys
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Read and parse a TOML settings file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            LoggerError::config(
                "logger",
                format!("cannot read '{}': {}", path.display(), e),
            )
        })?;
        Self::from_toml_str(&content)
    }

    #[must_use]
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    #[must_use]
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn with_suppress_logo(mut self, suppress: bool) -> Self {
        self.suppress_logo = suppress;
        self
    }

    /// Build a logger writing JSON lines to `writer`
    ///
    /// Fails only when the format is `"console"`.
    ///
    /// # Example
    ///
    /// ```
    /// use logger_factory::{Config, LogLevel};
    ///
    /// let logger = Config::new()
    ///     .with_level(LogLevel::Info)
    ///     .build(std::io::stderr())
    ///     .unwrap();
    /// assert_eq!(logger.format(), "logfmt");
    ///
    /// assert!(Config::new().with_format("console").build(std::io::stderr()).is_err());
    /// ```
    pub fn build<W: Write + Send + 'static>(&self, writer: W) -> Result<Logger> {
        self.build_with_enabler(writer, self.level)
    }

    /// Same as [`Config::build`] with a custom level predicate in place of `level`
    pub fn build_with_enabler<W, E>(&self, writer: W, enabler: E) -> Result<Logger>
    where
        W: Write + Send + 'static,
        E: LevelEnabler + 'static,
    {
        let resolved = format::resolve(&self.format)?;

        // One encoder whatever the designator says
        let encoder = JsonEncoder::new(EncoderConfig::default());
        let core = Core::new(encoder, LockedWriter::new(writer), enabler);

        Ok(Logger::from_core(core, resolved))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
