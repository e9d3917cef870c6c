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

use std::fmt;
use std::sync::Mutex;

use super::flusher::Flusher;
use crate::Append;
use crate::Filter;
use crate::Level;
use crate::Trap;
use crate::filter::FilterResult;
use crate::record::Location;
use crate::record::Metadata;
use crate::record::Origin;
use crate::record::Record;

/// A logging context that dispatches log records to one or more dispatches.
///
/// Build one with [`builder`](crate::builder) and share it as an `Arc<Logger>`. Logging through
/// it never fails from the caller's point of view: errors raised by appenders are handed to
/// the configured [`Trap`].
#[derive(Debug)]
pub struct Logger {
    dispatches: Vec<Dispatch>,
    trap: Box<dyn Trap>,
    flusher: Mutex<Option<Flusher>>,
}

impl Logger {
    pub(super) fn new(dispatches: Vec<Dispatch>, trap: Box<dyn Trap>) -> Self {
        Self {
            dispatches,
            trap,
            flusher: Mutex::new(None),
        }
    }

    pub(super) fn set_flusher(&self, flusher: Flusher) {
        match self.flusher.lock() {
            Ok(mut slot) => *slot = Some(flusher),
            Err(poisoned) => *poisoned.into_inner() = Some(flusher),
        }
    }

    /// Whether a message of `level` for `target` would reach any appender.
    pub fn enabled(&self, level: Level, target: &str) -> bool {
        let metadata = Metadata::new(level, target, Origin::Facade);
        self.enabled_for(&metadata)
    }

    pub(crate) fn enabled_for(&self, metadata: &Metadata) -> bool {
        self.dispatches
            .iter()
            .any(|dispatch| dispatch.enabled(metadata))
    }

    /// Log a message with severity, call site and format arguments.
    ///
    /// The target is the module part of the location's function path. For trait methods it is
    /// the implementing type.
    pub fn log(&self, level: Level, location: Location<'_>, args: fmt::Arguments<'_>) {
        let target = function_target(location.function());

        self.log_record(
            &Record::builder()
                .level(level)
                .target(target)
                .location(location)
                .args(args)
                .build(),
        );
    }

    /// Log an info message.
    pub fn info(&self, location: Location<'_>, args: fmt::Arguments<'_>) {
        self.log(Level::Info, location, args);
    }

    /// Log a warning message.
    pub fn warn(&self, location: Location<'_>, args: fmt::Arguments<'_>) {
        self.log(Level::Warn, location, args);
    }

    /// Log an error message.
    pub fn error(&self, location: Location<'_>, args: fmt::Arguments<'_>) {
        self.log(Level::Error, location, args);
    }

    /// Log a critical message.
    pub fn critical(&self, location: Location<'_>, args: fmt::Arguments<'_>) {
        self.log(Level::Critical, location, args);
    }

    /// Dispatch a fully built record.
    pub fn log_record(&self, record: &Record) {
        for dispatch in &self.dispatches {
            dispatch.log(record, self.trap.as_ref());
        }
    }

    /// Flush all appenders.
    pub fn flush(&self) {
        for dispatch in &self.dispatches {
            dispatch.flush(self.trap.as_ref());
        }
    }

    /// Stop the periodic flush and flush all appenders.
    ///
    /// Logging keeps working after shutdown, but buffered appenders are no longer flushed in the
    /// background. Calling this more than once is harmless.
    pub fn shutdown(&self) {
        let flusher = match self.flusher.lock() {
            Ok(mut slot) => slot.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        };
        if let Some(mut flusher) = flusher {
            flusher.stop();
        }
        self.flush();
    }
}

/// `app::net::connect` targets `app::net`, `<app::Conn as app::Tr>::m` targets `app::Conn`.
fn function_target(function: &str) -> &str {
    if let Some(qualified) = function.strip_prefix('<') {
        let self_type = match qualified.split_once(" as ") {
            Some((self_type, _)) => Some(self_type),
            None => qualified.rsplit_once('>').map(|(self_type, _)| self_type),
        };
        if let Some(self_type) = self_type {
            return self_type;
        }
    }

    match function.rsplit_once("::") {
        Some((module, _)) => module,
        None => function,
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        let flusher = match self.flusher.get_mut() {
            Ok(slot) => slot.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        };
        drop(flusher);
        self.flush();
    }
}

/// A grouped set of appenders and filters.
///
/// The [`Logger`] dispatches log records to one or more [`Dispatch`] instances. `filters` decide
/// whether a record is passed on, and `appends` write it to a destination.
#[derive(Debug)]
pub(super) struct Dispatch {
    filters: Vec<Box<dyn Filter>>,
    appends: Vec<Box<dyn Append>>,
}

impl Dispatch {
    pub(super) fn new(filters: Vec<Box<dyn Filter>>, appends: Vec<Box<dyn Append>>) -> Self {
        debug_assert!(
            !appends.is_empty(),
            "A Dispatch must have at least one append"
        );

        Self { filters, appends }
    }

    fn enabled(&self, metadata: &Metadata) -> bool {
        for filter in &self.filters {
            match filter.enabled(metadata) {
                FilterResult::Reject => return false,
                FilterResult::Accept => return true,
                FilterResult::Neutral => {}
            }
        }

        true
    }

    fn log(&self, record: &Record, trap: &dyn Trap) {
        for filter in &self.filters {
            match filter.matches(record) {
                FilterResult::Reject => return,
                FilterResult::Accept => break,
                FilterResult::Neutral => {}
            }
        }

        // one failing appender must not starve the others
        for append in &self.appends {
            if let Err(err) = append.append(record) {
                trap.trap(&err.with_context("operation", "append"));
            }
        }
    }

    fn flush(&self, trap: &dyn Trap) {
        for append in &self.appends {
            if let Err(err) = append.flush() {
                trap.trap(&err.with_context("operation", "flush"));
            }
        }
    }
}
