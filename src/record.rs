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

//! Log record and metadata.

use std::fmt;

use jiff::Zoned;

use crate::Level;

/// The call site of a log message.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash)]
pub struct Location<'a> {
    file: &'a str,
    line: u32,
    function: &'a str,
}

impl<'a> Location<'a> {
    /// Create a location from its parts.
    ///
    /// Use [`location!`](crate::location!) to capture the current call site.
    pub const fn new(file: &'a str, line: u32, function: &'a str) -> Self {
        Self {
            file,
            line,
            function,
        }
    }

    /// The source file as written by the compiler or the host, usually a relative path.
    pub fn file(&self) -> &'a str {
        self.file
    }

    /// The base name of [`file`](Location::file).
    pub fn file_name(&self) -> &'a str {
        self.file.rsplit(['/', '\\']).next().unwrap_or(self.file)
    }

    /// The line number, 1-based. `0` when unknown.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// The full path of the enclosing function, or an empty string when unknown.
    pub fn function(&self) -> &'a str {
        self.function
    }

    /// The last path segment of [`function`](Location::function).
    pub fn function_name(&self) -> &'a str {
        self.function.rsplit("::").next().unwrap_or(self.function)
    }
}

impl Location<'static> {
    /// The location of the caller of the function this is invoked in.
    ///
    /// The function name is not available this way and is left empty.
    #[track_caller]
    pub fn caller() -> Self {
        let caller = std::panic::Location::caller();
        Self::new(caller.file(), caller.line(), "")
    }
}

/// Where a record entered the logger.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Origin {
    /// A direct call on a [`Logger`](crate::Logger) or one of the logging macros.
    #[default]
    Facade,
    /// A record forwarded from the [`log`] crate.
    LogCrate,
    /// A message forwarded from a host debug channel.
    Channel,
}

/// Metadata about a log message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Metadata<'a> {
    level: Level,
    target: &'a str,
    origin: Origin,
}

impl<'a> Metadata<'a> {
    /// Create metadata from its parts.
    pub fn new(level: Level, target: &'a str, origin: Origin) -> Self {
        Self {
            level,
            target,
            origin,
        }
    }

    /// Get the level.
    pub fn level(&self) -> Level {
        self.level
    }

    /// Get the target.
    pub fn target(&self) -> &'a str {
        self.target
    }

    /// Get the origin.
    pub fn origin(&self) -> Origin {
        self.origin
    }
}

/// The payload of a log message.
#[derive(Clone, Debug)]
pub struct Record<'a> {
    time: Zoned,
    metadata: Metadata<'a>,
    location: Location<'a>,
    args: fmt::Arguments<'a>,
}

impl<'a> Record<'a> {
    /// Create a [`RecordBuilder`].
    pub fn builder() -> RecordBuilder<'a> {
        RecordBuilder::default()
    }

    /// The observed time.
    pub fn time(&self) -> &Zoned {
        &self.time
    }

    /// Metadata about the log directive.
    pub fn metadata(&self) -> &Metadata<'a> {
        &self.metadata
    }

    /// The severity of the message.
    pub fn level(&self) -> Level {
        self.metadata.level
    }

    /// The name of the target of the directive, usually a module path.
    pub fn target(&self) -> &'a str {
        self.metadata.target
    }

    /// Where the record entered the logger.
    pub fn origin(&self) -> Origin {
        self.metadata.origin
    }

    /// The call site.
    pub fn location(&self) -> &Location<'a> {
        &self.location
    }

    /// The message body.
    pub fn args(&self) -> &fmt::Arguments<'a> {
        &self.args
    }
}

/// Builder for [`Record`].
#[derive(Debug)]
pub struct RecordBuilder<'a> {
    record: Record<'a>,
}

impl Default for RecordBuilder<'_> {
    fn default() -> Self {
        RecordBuilder {
            record: Record {
                time: Zoned::now(),
                metadata: Metadata::new(Level::Info, "", Origin::Facade),
                location: Location::default(),
                args: format_args!(""),
            },
        }
    }
}

impl<'a> RecordBuilder<'a> {
    /// Set [`args`](Record::args).
    pub fn args(mut self, args: fmt::Arguments<'a>) -> Self {
        self.record.args = args;
        self
    }

    /// Set [`level`](Record::level).
    pub fn level(mut self, level: Level) -> Self {
        self.record.metadata.level = level;
        self
    }

    /// Set [`target`](Record::target).
    pub fn target(mut self, target: &'a str) -> Self {
        self.record.metadata.target = target;
        self
    }

    /// Set [`origin`](Record::origin).
    pub fn origin(mut self, origin: Origin) -> Self {
        self.record.metadata.origin = origin;
        self
    }

    /// Set [`location`](Record::location).
    pub fn location(mut self, location: Location<'a>) -> Self {
        self.record.location = location;
        self
    }

    /// Set [`time`](Record::time). Defaults to the time the builder was created.
    pub fn time(mut self, time: Zoned) -> Self {
        self.record.time = time;
        self
    }

    /// Invoke the builder and return a `Record`.
    pub fn build(self) -> Record<'a> {
        self.record
    }
}
