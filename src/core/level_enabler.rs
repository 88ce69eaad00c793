//! Severity predicates deciding which records reach the sink

use super::log_level::LogLevel;

/// Decides whether records at a given level are emitted
pub trait LevelEnabler: Send + Sync {
    fn enabled(&self, level: LogLevel) -> bool;
}

/// A level acts as a minimum threshold: it enables itself and everything above
impl LevelEnabler for LogLevel {
    fn enabled(&self, level: LogLevel) -> bool {
        level >= *self
    }
}

impl<F> LevelEnabler for F
where
    F: Fn(LogLevel) -> bool + Send + Sync,
{
    fn enabled(&self, level: LogLevel) -> bool {
        self(level)
    }
}
