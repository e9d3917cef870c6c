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

//! The optional process-wide default logger.

use std::sync::Arc;
use std::sync::OnceLock;

use crate::Builder;
use crate::Error;
use crate::Logger;
use crate::bridge;
use crate::filter::EnvFilter;
use crate::logger::DEFAULT_LOG_FILE;
use crate::logger::console_and_file;

/// The environment variable [`init`] reads its level directives from.
pub const DEFAULT_LEVEL_ENV: &str = "LOGMUX_LEVEL";

static DEFAULT_LOGGER: OnceLock<Arc<Logger>> = OnceLock::new();

/// Install `logger` as the process-wide default.
///
/// The default is what the macros log to when no explicit logger is given, and where the `log`
/// crate bridge forwards records. It can be set only once.
///
/// # Errors
///
/// Return an error if a default logger has already been set.
pub fn set_default(logger: Arc<Logger>) -> Result<(), Error> {
    DEFAULT_LOGGER.set(logger).map_err(|_| already_set())
}

fn already_set() -> Error {
    Error::new("the default logger has already been set")
}

fn ensure_no_default() -> Result<(), Error> {
    match default_logger() {
        Some(_) => Err(already_set()),
        None => Ok(()),
    }
}

/// Return the process-wide default logger, if one has been installed.
pub fn default_logger() -> Option<&'static Arc<Logger>> {
    DEFAULT_LOGGER.get()
}

/// Set up the default logger with a colored console and a `logs.txt` file.
///
/// The level directives are read from the `LOGMUX_LEVEL` environment variable in
/// [`EnvFilter`] syntax and default to `trace`. Records of the `log` crate are forwarded to the
/// default logger as well.
///
/// # Errors
///
/// Return an error if the log file cannot be created, or if a default logger or a `log` crate
/// logger has already been set.
///
/// # Examples
///
/// ```no_run
/// logmux::init().unwrap();
/// logmux::info!("Hello, world!");
/// logmux::shutdown();
/// ```
pub fn init() -> Result<(), Error> {
    // the file of an installed default must not be truncated
    ensure_no_default()?;

    let filter = EnvFilter::from_env_or(DEFAULT_LEVEL_ENV, "trace");
    init_with(console_and_file(filter, DEFAULT_LOG_FILE)?)
}

/// Build `builder` into the default logger and forward records of the `log` crate to it.
///
/// Nothing is installed when this fails: the `log` crate logger is claimed before the default
/// logger is set, and a logger built here is dropped on error.
///
/// # Errors
///
/// Return an error if the logger cannot be built, or if a default logger or a `log` crate
/// logger has already been set.
///
/// # Examples
///
/// ```
/// use logmux::append;
///
/// logmux::init_with(logmux::builder().append(append::Stderr::default())).unwrap();
/// log::info!("forwarded to stderr");
/// ```
pub fn init_with(builder: Builder<true>) -> Result<(), Error> {
    ensure_no_default()?;

    let logger = builder.build()?;
    bridge::try_setup_log_crate().map_err(|err| {
        Error::new("the log crate global logger has already been set").with_source(err)
    })?;
    set_default(logger)
}

/// Shut down the default logger, if one has been installed.
///
/// See [`Logger::shutdown`].
pub fn shutdown() {
    if let Some(logger) = default_logger() {
        logger.shutdown();
    }
}
