//! Output format resolution
//!
//! The configured format string only goes through two rules: `"console"` is
//! refused outright (no terminal detection is attempted), and an empty or
//! `"auto"` value becomes [`DEFAULT_FORMAT`]. Every other value is kept as-is.
//! The resolved designator is informational; records are always JSON encoded.

use super::error::{LoggerError, Result};

/// Designator substituted for `""` and `"auto"`
pub const DEFAULT_FORMAT: &str = "logfmt";

pub const AUTO_FORMAT: &str = "auto";

pub const CONSOLE_FORMAT: &str = "console";

/// Resolve a configured format string into the designator the logger carries
pub fn resolve(format: &str) -> Result<String> {
    match format {
        CONSOLE_FORMAT => Err(LoggerError::unsupported_format(format)),
        "" | AUTO_FORMAT => Ok(DEFAULT_FORMAT.to_string()),
        other => Ok(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_is_rejected() {
        let err = resolve("console").unwrap_err();
        assert!(matches!(
            err,
            LoggerError::UnsupportedFormat { ref format } if format == "console"
        ));
    }

    #[test]
    fn test_auto_and_empty_default() {
        assert_eq!(resolve("").unwrap(), DEFAULT_FORMAT);
        assert_eq!(resolve("auto").unwrap(), DEFAULT_FORMAT);
    }

    #[test]
    fn test_other_values_pass_through() {
        assert_eq!(resolve("json").unwrap(), "json");
        assert_eq!(resolve("logfmt").unwrap(), "logfmt");
        // Matching is exact
        assert_eq!(resolve("Console").unwrap(), "Console");
        assert_eq!(resolve("AUTO").unwrap(), "AUTO");
    }
}
