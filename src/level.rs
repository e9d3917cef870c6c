// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Severity levels.

use std::cmp;
use std::fmt;
use std::str::FromStr;

/// The severity of a log message.
///
/// Levels are ordered by severity: `Trace < Debug < Info < Warn < Error < Critical`.
#[repr(usize)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub enum Level {
    /// Very low priority, often extremely verbose, information.
    Trace = 100,
    /// Lower priority information.
    Debug = 200,
    /// Useful information.
    Info = 300,
    /// Hazardous situations.
    Warn = 400,
    /// Very serious errors.
    Error = 500,
    /// Errors the process is unlikely to recover from.
    Critical = 600,
}

impl Level {
    /// Return the string representation of the `Level`.
    ///
    /// This returns the same string as the `fmt::Display` implementation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Trace => "trace",
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warning",
            Level::Error => "error",
            Level::Critical => "critical",
        }
    }

    /// The closest [`log::Level`]. `Critical` maps to [`log::Level::Error`].
    pub fn to_log_level(&self) -> log::Level {
        match self {
            Level::Trace => log::Level::Trace,
            Level::Debug => log::Level::Debug,
            Level::Info => log::Level::Info,
            Level::Warn => log::Level::Warn,
            Level::Error | Level::Critical => log::Level::Error,
        }
    }
}

impl From<log::Level> for Level {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Self::Error,
            log::Level::Warn => Self::Warn,
            log::Level::Info => Self::Info,
            log::Level::Debug => Self::Debug,
            log::Level::Trace => Self::Trace,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// The minimum severity a filter lets through, or `Off`.
#[repr(usize)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub enum LevelFilter {
    /// Let every level through.
    Trace = 100,
    /// Corresponds to the `Debug` log level.
    Debug = 200,
    /// Corresponds to the `Info` log level.
    Info = 300,
    /// Corresponds to the `Warn` log level.
    Warn = 400,
    /// Corresponds to the `Error` log level.
    Error = 500,
    /// Corresponds to the `Critical` log level.
    Critical = 600,
    /// A level above all log levels.
    Off = 700,
}

impl LevelFilter {
    /// Return the string representation of the `LevelFilter`.
    pub fn as_str(&self) -> &'static str {
        match self {
            LevelFilter::Trace => "trace",
            LevelFilter::Debug => "debug",
            LevelFilter::Info => "info",
            LevelFilter::Warn => "warning",
            LevelFilter::Error => "error",
            LevelFilter::Critical => "critical",
            LevelFilter::Off => "off",
        }
    }

    /// Whether a message of `level` passes this filter.
    pub fn allows(&self, level: Level) -> bool {
        level >= *self
    }

    /// The closest [`log::LevelFilter`].
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LevelFilter::Trace => log::LevelFilter::Trace,
            LevelFilter::Debug => log::LevelFilter::Debug,
            LevelFilter::Info => log::LevelFilter::Info,
            LevelFilter::Warn => log::LevelFilter::Warn,
            LevelFilter::Error | LevelFilter::Critical => log::LevelFilter::Error,
            LevelFilter::Off => log::LevelFilter::Off,
        }
    }
}

impl From<Level> for LevelFilter {
    fn from(level: Level) -> Self {
        match level {
            Level::Trace => LevelFilter::Trace,
            Level::Debug => LevelFilter::Debug,
            Level::Info => LevelFilter::Info,
            Level::Warn => LevelFilter::Warn,
            Level::Error => LevelFilter::Error,
            Level::Critical => LevelFilter::Critical,
        }
    }
}

impl From<log::LevelFilter> for LevelFilter {
    fn from(level: log::LevelFilter) -> Self {
        match level {
            log::LevelFilter::Off => Self::Off,
            log::LevelFilter::Error => Self::Error,
            log::LevelFilter::Warn => Self::Warn,
            log::LevelFilter::Info => Self::Info,
            log::LevelFilter::Debug => Self::Debug,
            log::LevelFilter::Trace => Self::Trace,
        }
    }
}

impl fmt::Display for LevelFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl PartialEq<LevelFilter> for Level {
    fn eq(&self, other: &LevelFilter) -> bool {
        PartialEq::eq(&(*self as usize), &(*other as usize))
    }
}

impl PartialOrd<LevelFilter> for Level {
    fn partial_cmp(&self, other: &LevelFilter) -> Option<cmp::Ordering> {
        Some(Ord::cmp(&(*self as usize), &(*other as usize)))
    }
}

impl PartialEq<Level> for LevelFilter {
    fn eq(&self, other: &Level) -> bool {
        other.eq(self)
    }
}

impl PartialOrd<Level> for LevelFilter {
    fn partial_cmp(&self, other: &Level) -> Option<cmp::Ordering> {
        Some(Ord::cmp(&(*self as usize), &(*other as usize)))
    }
}

/// The type returned by `from_str` when the string doesn't match any of the log levels.
#[derive(Debug, PartialEq, Eq)]
#[non_exhaustive]
pub struct ParseLevelError {}

impl fmt::Display for ParseLevelError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.write_str("malformed log level")
    }
}

impl std::error::Error for ParseLevelError {}

const LEVEL_NAMES: [(&str, Level); 9] = [
    ("trace", Level::Trace),
    ("debug", Level::Debug),
    ("info", Level::Info),
    ("warn", Level::Warn),
    ("warning", Level::Warn),
    ("error", Level::Error),
    ("err", Level::Error),
    ("critical", Level::Critical),
    ("fatal", Level::Critical),
];

impl FromStr for Level {
    type Err = ParseLevelError;
    fn from_str(s: &str) -> Result<Level, Self::Err> {
        LEVEL_NAMES
            .iter()
            .find(|(name, _)| s.eq_ignore_ascii_case(name))
            .map(|(_, level)| *level)
            .ok_or(ParseLevelError {})
    }
}

impl FromStr for LevelFilter {
    type Err = ParseLevelError;
    fn from_str(s: &str) -> Result<LevelFilter, Self::Err> {
        if s.eq_ignore_ascii_case("off") {
            return Ok(LevelFilter::Off);
        }
        Level::from_str(s).map(LevelFilter::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_are_ordered_by_severity() {
        assert!(Level::Trace < Level::Debug);
        assert!(Level::Warn < Level::Error);
        assert!(Level::Error < Level::Critical);

        assert!(LevelFilter::Warn.allows(Level::Critical));
        assert!(LevelFilter::Warn.allows(Level::Warn));
        assert!(!LevelFilter::Warn.allows(Level::Info));
        assert!(!LevelFilter::Off.allows(Level::Critical));
        assert!(LevelFilter::Trace.allows(Level::Trace));
    }

    #[test]
    fn parse_accepts_aliases() {
        assert_eq!("WARNING".parse::<Level>(), Ok(Level::Warn));
        assert_eq!("warn".parse::<Level>(), Ok(Level::Warn));
        assert_eq!("err".parse::<Level>(), Ok(Level::Error));
        assert_eq!("Fatal".parse::<Level>(), Ok(Level::Critical));
        assert_eq!("off".parse::<LevelFilter>(), Ok(LevelFilter::Off));
        assert_eq!("critical".parse::<LevelFilter>(), Ok(LevelFilter::Critical));
        assert!("verbose".parse::<Level>().is_err());
    }

    #[test]
    fn critical_maps_onto_log_error() {
        assert_eq!(Level::Critical.to_log_level(), log::Level::Error);
        assert_eq!(Level::from(log::Level::Error), Level::Error);
        assert_eq!(
            LevelFilter::Critical.to_log_level_filter(),
            log::LevelFilter::Error
        );
        assert_eq!(LevelFilter::from(log::LevelFilter::Off), LevelFilter::Off);
    }

    #[test]
    fn display_uses_long_names() {
        assert_eq!(Level::Warn.to_string(), "warning");
        assert_eq!(format!("{:>8}", Level::Info), "    info");
    }
}
