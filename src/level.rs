//! Severity levels and their terminal styles

use colored::{ColoredString, Colorize};
use std::fmt;
use std::str::FromStr;

/// Severity of a single log call, also used as the logger's threshold.
///
/// Variants are declared most severe first so the derived ordering is the
/// positional one: `Error < Warning < Info < Debug`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Error,
    Warning,
    Info,
    Debug,
}

impl Level {
    pub const ALL: [Level; 4] = [Level::Error, Level::Warning, Level::Info, Level::Debug];

    /// Position in the severity table, 0 being the most severe
    pub fn position(self) -> usize {
        match self {
            Level::Error => 0,
            Level::Warning => 1,
            Level::Info => 2,
            Level::Debug => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Level::Error => "error",
            Level::Warning => "warning",
            Level::Info => "info",
            Level::Debug => "debug",
        }
    }

    /// Whether a message at `level` passes when `self` is the threshold
    pub fn allows(self, level: Level) -> bool {
        level.position() <= self.position()
    }

    /// Wrap `message` in this level's terminal style, reset included
    pub fn paint(self, message: &str) -> ColoredString {
        match self {
            Level::Error => message.red(),
            Level::Warning => message.bright_yellow(),
            Level::Info => message.bright_cyan(),
            Level::Debug => message.black().on_bright_yellow(),
        }
    }

    /// Most verbose `log` facade filter that still matches this threshold
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            Level::Error => log::LevelFilter::Error,
            Level::Warning => log::LevelFilter::Warn,
            Level::Info => log::LevelFilter::Info,
            // trace records are folded into debug
            Level::Debug => log::LevelFilter::Trace,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the four level names
#[derive(Debug, Clone, PartialEq)]
pub struct ParseLevelError(pub String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "unknown level: {}", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "error" => Ok(Level::Error),
            "warning" => Ok(Level::Warning),
            "info" => Ok(Level::Info),
            "debug" => Ok(Level::Debug),
            other => Err(ParseLevelError(other.to_string())),
        }
    }
}

impl From<log::Level> for Level {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Level::Error,
            log::Level::Warn => Level::Warning,
            log::Level::Info => Level::Info,
            log::Level::Debug | log::Level::Trace => Level::Debug,
        }
    }
}
