//! Log level definitions

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Severity of a log call.
///
/// The known levels are totally ordered
/// `Debug < Info < Success < Warning < Error < Fatal`. `Unknown` is the result
/// of a failed [`Level::parse`]; it compares with nothing and is never a valid
/// threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Debug,
    #[default]
    Info,
    Success,
    Warning,
    Error,
    Fatal,
    Unknown,
}

impl Level {
    /// Known levels in ascending severity.
    pub const ALL: [Level; 6] = [
        Level::Debug,
        Level::Info,
        Level::Success,
        Level::Warning,
        Level::Error,
        Level::Fatal,
    ];

    /// Case-insensitive parse. Unrecognized names yield [`Level::Unknown`].
    pub fn parse(name: &str) -> Level {
        match name.to_ascii_lowercase().as_str() {
            "debug" => Level::Debug,
            "info" => Level::Info,
            "success" => Level::Success,
            "warning" => Level::Warning,
            "error" => Level::Error,
            "fatal" => Level::Fatal,
            _ => Level::Unknown,
        }
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Success => "success",
            Level::Warning => "warning",
            Level::Error => "error",
            Level::Fatal => "fatal",
            Level::Unknown => "unknown",
        }
    }

    /// Position in the severity order, `None` for `Unknown`.
    pub fn rank(&self) -> Option<u8> {
        match self {
            Level::Debug => Some(0),
            Level::Info => Some(1),
            Level::Success => Some(2),
            Level::Warning => Some(3),
            Level::Error => Some(4),
            Level::Fatal => Some(5),
            Level::Unknown => None,
        }
    }

    /// True when this level is strictly less severe than `threshold`.
    pub fn should_skip(&self, threshold: Level) -> bool {
        matches!((self.rank(), threshold.rank()), (Some(own), Some(min)) if own < min)
    }

    pub fn is_unknown(&self) -> bool {
        *self == Level::Unknown
    }

    pub fn color(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            Level::Debug => BrightBlack,
            Level::Info => Cyan,
            Level::Success => Green,
            Level::Warning => Yellow,
            Level::Error => Red,
            Level::Fatal => BrightRed,
            Level::Unknown => White,
        }
    }
}

impl PartialOrd for Level {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.rank(), other.rank()) {
            (Some(a), Some(b)) => Some(a.cmp(&b)),
            _ if self == other => Some(Ordering::Equal),
            _ => None,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for Level {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Level::parse(s) {
            Level::Unknown => Err(LoggerError::unknown_level(s)),
            level => Ok(level),
        }
    }
}
