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

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use super::flusher::Flusher;
use super::log_impl::Dispatch;
use super::log_impl::Logger;
use crate::Append;
use crate::Error;
use crate::Filter;
use crate::Level;
use crate::LevelFilter;
use crate::Trap;
use crate::append;
use crate::trap::DefaultTrap;

/// The flush interval of [`default_sinks`].
pub const DEFAULT_FLUSH_INTERVAL: Duration = Duration::from_secs(5);

/// The log file name of [`default_sinks`] when used through [`init`](crate::init).
pub const DEFAULT_LOG_FILE: &str = "logs.txt";

/// Create a new empty [builder][Builder].
///
/// At least one append must be added before the logger can be built:
///
/// ```rust
/// use logmux::LevelFilter;
/// use logmux::append;
///
/// let logger = logmux::builder()
///     // .build()  CANNOT COMPILE: a staging dispatch without Append
///     .filter(LevelFilter::Info)
///     .append(append::Stdout::default())
///     .build()
///     .unwrap();
/// ```
///
/// Multiple dispatches can be added:
///
/// ```rust
/// use logmux::LevelFilter;
/// use logmux::append;
///
/// let logger = logmux::builder()
///     .filter(LevelFilter::Info)
///     .append(append::Stdout::default())
///     .dispatch() // finish the current dispatch and start a new staging dispatch
///     .filter(LevelFilter::Error)
///     .append(append::Stderr::default())
///     .build()
///     .unwrap();
/// ```
pub fn builder() -> Builder<false> {
    Builder::default()
}

/// Create a [`Builder`] with the console and file sinks most applications start with.
///
/// Both a colored [`Stdout`](append::Stdout) and a truncated [`File`](append::File) at `path`
/// receive every level. Every line is flushed to the file as it is written, so nothing is lost
/// when the process exits without [`shutdown`](crate::shutdown). The logger is also flushed every
/// [`DEFAULT_FLUSH_INTERVAL`].
///
/// # Errors
///
/// Returns an error if the log file cannot be created.
pub fn default_sinks(path: impl Into<PathBuf>) -> Result<Builder<true>, Error> {
    console_and_file(LevelFilter::Trace, path)
}

pub(crate) fn console_and_file(
    filter: impl Into<Box<dyn Filter>>,
    path: impl Into<PathBuf>,
) -> Result<Builder<true>, Error> {
    let file = append::FileBuilder::new(path)
        .flush_level(Level::Trace)
        .build()?;

    Ok(builder()
        .filter(filter)
        .append(append::Stdout::default())
        .append(file)
        .flush_every(DEFAULT_FLUSH_INTERVAL))
}

/// A builder for configuring the logger. See also [`builder`] for a fluent API.
///
/// * `READY=false`: The initialized state. You can configure [`Filter`]s and [`Append`]s for the
///   current staging dispatch. Once at least one append is configured, the builder transits to
///   `READY=true`.
/// * `READY=true`: The builder can be [built][Builder::build] into a [`Logger`]. Or, you can start
///   a new staging dispatch by calling [dispatch][Builder::dispatch].
#[must_use = "call `build` to create the logger"]
#[derive(Debug)]
pub struct Builder<const READY: bool = true> {
    // for current dispatch
    filters: Vec<Box<dyn Filter>>,
    appends: Vec<Box<dyn Append>>,

    // stashed dispatches
    dispatches: Vec<Dispatch>,

    trap: Box<dyn Trap>,
    flush_interval: Option<Duration>,
    thread_name: String,
}

impl Default for Builder<false> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const READY: bool> Builder<READY> {
    /// Add an [`Append`] to the under constructing `Dispatch`.
    pub fn append(mut self, append: impl Into<Box<dyn Append>>) -> Builder<true> {
        self.appends.push(append.into());

        Builder {
            filters: self.filters,
            appends: self.appends,
            dispatches: self.dispatches,
            trap: self.trap,
            flush_interval: self.flush_interval,
            thread_name: self.thread_name,
        }
    }

    /// Flush all appenders from a background thread every `interval`.
    ///
    /// Disabled by default.
    pub fn flush_every(mut self, interval: Duration) -> Self {
        self.flush_interval = Some(interval);
        self
    }

    /// Override the name of the periodic flush thread.
    ///
    /// The default thread name is "logmux-flush".
    pub fn thread_name(mut self, name: impl Into<String>) -> Self {
        self.thread_name = name.into();
        self
    }

    /// Set the [`Trap`] receiving errors raised while logging.
    ///
    /// Default to [`DefaultTrap`], which prints them to stderr.
    pub fn trap(mut self, trap: impl Into<Box<dyn Trap>>) -> Self {
        self.trap = trap.into();
        self
    }
}

impl Builder<false> {
    /// Create a new empty [`Builder`].
    pub fn new() -> Self {
        Self {
            filters: vec![],
            appends: vec![],
            dispatches: vec![],
            trap: Box::new(DefaultTrap::default()),
            flush_interval: None,
            thread_name: "logmux-flush".to_string(),
        }
    }

    /// Add a [`Filter`] to the under constructing `Dispatch`.
    pub fn filter(mut self, filter: impl Into<Box<dyn Filter>>) -> Builder<false> {
        self.filters.push(filter.into());
        self
    }
}

impl Builder<true> {
    /// Construct a new `Dispatch` with the configured [`Filter`]s and [`Append`]s.
    pub fn dispatch(mut self) -> Builder<false> {
        let dispatch = Dispatch::new(self.filters, self.appends);
        self.dispatches.push(dispatch);

        Builder {
            filters: vec![],
            appends: vec![],
            dispatches: self.dispatches,
            trap: self.trap,
            flush_interval: self.flush_interval,
            thread_name: self.thread_name,
        }
    }

    /// Build the [`Logger`] with all the dispatches configured, and start its periodic flush if
    /// one is set.
    ///
    /// # Errors
    ///
    /// Returns an error if the periodic flush thread cannot be spawned.
    pub fn build(mut self) -> Result<Arc<Logger>, Error> {
        // finish the current staging dispatch
        let dispatch = Dispatch::new(self.filters, self.appends);
        self.dispatches.push(dispatch);

        let logger = Arc::new(Logger::new(self.dispatches, self.trap));
        if let Some(interval) = self.flush_interval {
            let flusher = Flusher::spawn(Arc::downgrade(&logger), interval, self.thread_name)?;
            logger.set_flusher(flusher);
        }
        Ok(logger)
    }
}
