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

use std::fmt::Write;

#[cfg(feature = "colored")]
use colored::Color;
#[cfg(feature = "colored")]
use colored::ColoredString;
#[cfg(feature = "colored")]
use colored::Colorize;
use jiff::tz::TimeZone;

use crate::Error;
use crate::Level;
use crate::layout::Layout;
use crate::record::Record;

/// A layout that formats a log record as one line of text.
///
/// Output format:
///
/// ```text
/// [2024-08-11 22:44:57] [info] [main.rs:51] [connect] Hello info!
/// [2024-08-11 22:44:57] [warning] [main.rs:52] [connect] Hello warning!
/// [2024-08-11 22:44:57] [error] [main.rs:53] [connect] Hello error!
/// [2024-08-11 22:44:57] [critical] [main.rs:54] [connect] Hello critical!
/// ```
///
/// The source is the base name of the file and the function is the last segment of its path.
///
/// With the `colored` feature, levels are colored unless [`no_color`](TextLayout::no_color) is
/// set. You can customize the color of each level with [`LevelColor`].
///
/// Timestamps use the system time zone unless one is set with
/// [`timezone`](TextLayout::timezone).
///
/// # Examples
///
/// ```
/// use logmux::layout::TextLayout;
///
/// let layout = TextLayout::default().no_color();
/// ```
#[derive(Debug, Clone, Default)]
pub struct TextLayout {
    #[cfg(feature = "colored")]
    colors: LevelColor,
    no_color: bool,
    tz: Option<TimeZone>,
}

impl TextLayout {
    /// Customize the level colors.
    #[cfg(feature = "colored")]
    pub fn colors(mut self, colors: LevelColor) -> Self {
        self.colors = colors;
        self
    }

    /// Disable colored output. File sinks always use this.
    pub fn no_color(mut self) -> Self {
        self.no_color = true;
        self
    }

    /// Render timestamps in the given time zone.
    pub fn timezone(mut self, tz: TimeZone) -> Self {
        self.tz = Some(tz);
        self
    }

    #[cfg(feature = "colored")]
    fn write_level(&self, text: &mut String, level: Level) -> std::fmt::Result {
        if self.no_color {
            write!(text, "{level}")
        } else {
            write!(text, "{}", self.colors.colorize(level))
        }
    }

    #[cfg(not(feature = "colored"))]
    fn write_level(&self, text: &mut String, level: Level) -> std::fmt::Result {
        write!(text, "{level}")
    }
}

impl Layout for TextLayout {
    fn format(&self, record: &Record) -> Result<Vec<u8>, Error> {
        let time = match &self.tz {
            Some(tz) => record.time().with_time_zone(tz.clone()),
            None => record.time().clone(),
        };
        let location = record.location();

        let mut text = String::new();
        write!(&mut text, "[{}] [", time.strftime("%Y-%m-%d %H:%M:%S"))
            .map_err(Error::from_fmt_error)?;
        self.write_level(&mut text, record.level())
            .map_err(Error::from_fmt_error)?;
        write!(
            &mut text,
            "] [{file}:{line}] [{function}] {message}",
            file = location.file_name(),
            line = location.line(),
            function = location.function_name(),
            message = record.args(),
        )
        .map_err(Error::from_fmt_error)?;

        Ok(text.into_bytes())
    }
}

/// Colors for different log levels.
#[cfg(feature = "colored")]
#[derive(Debug, Clone)]
pub struct LevelColor {
    /// Color for trace level logs.
    pub trace: Color,
    /// Color for debug level logs.
    pub debug: Color,
    /// Color for info level logs.
    pub info: Color,
    /// Color for warning level logs. Rendered bold.
    pub warn: Color,
    /// Color for error level logs. Rendered bold.
    pub error: Color,
    /// Color for critical level logs. Rendered bold on [`critical_background`](Self::critical_background).
    pub critical: Color,
    /// Background color for critical level logs.
    pub critical_background: Color,
}

#[cfg(feature = "colored")]
impl Default for LevelColor {
    fn default() -> Self {
        Self {
            trace: Color::White,
            debug: Color::Cyan,
            info: Color::Green,
            warn: Color::Yellow,
            error: Color::Red,
            critical: Color::White,
            critical_background: Color::Red,
        }
    }
}

#[cfg(feature = "colored")]
impl LevelColor {
    /// Colorize the log level name.
    pub fn colorize(&self, level: Level) -> ColoredString {
        let name = ColoredString::from(level.as_str());
        match level {
            Level::Trace => name.color(self.trace),
            Level::Debug => name.color(self.debug),
            Level::Info => name.color(self.info),
            Level::Warn => name.color(self.warn).bold(),
            Level::Error => name.color(self.error).bold(),
            Level::Critical => name
                .color(self.critical)
                .on_color(self.critical_background)
                .bold(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use jiff::Zoned;

    use super::*;
    use crate::record::Location;

    fn render(layout: &TextLayout, level: Level, message: &str) -> String {
        let time = Zoned::from_str("2024-08-11T22:44:57.172105+08:00[+08:00]").unwrap();
        let bytes = layout
            .format(
                &Record::builder()
                    .time(time)
                    .level(level)
                    .location(Location::new("src/net/conn.rs", 51, "my_app::net::connect"))
                    .args(format_args!("{message}"))
                    .build(),
            )
            .unwrap();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn plain_line_matches_pattern() {
        let layout = TextLayout::default().no_color();
        assert_eq!(
            render(&layout, Level::Info, "Hello info!"),
            "[2024-08-11 22:44:57] [info] [conn.rs:51] [connect] Hello info!"
        );
        assert_eq!(
            render(&layout, Level::Warn, "careful"),
            "[2024-08-11 22:44:57] [warning] [conn.rs:51] [connect] careful"
        );
    }

    #[test]
    fn timezone_override_shifts_timestamp() {
        let layout = TextLayout::default().no_color().timezone(TimeZone::UTC);
        assert_eq!(
            render(&layout, Level::Critical, "down"),
            "[2024-08-11 14:44:57] [critical] [conn.rs:51] [connect] down"
        );
    }

    #[cfg(feature = "colored")]
    #[test]
    fn colored_line_keeps_message_intact() {
        colored::control::set_override(true);
        let line = render(&TextLayout::default(), Level::Error, "boom");
        assert!(line.starts_with("[2024-08-11 22:44:57] ["));
        assert!(line.contains("\u{1b}["));
        assert!(line.contains("error"));
        assert!(line.ends_with("] [conn.rs:51] [connect] boom"));
    }
}
