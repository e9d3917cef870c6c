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

use crate::Level;
use crate::Logger;
use crate::default_logger;
use crate::record::Location;
use crate::record::Metadata;
use crate::record::Origin;
use crate::record::Record;

struct LogCrateLogger(());

impl log::Log for LogCrateLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        let Some(logger) = default_logger() else {
            return false;
        };

        log::Log::enabled(&**logger, metadata)
    }

    fn log(&self, record: &log::Record) {
        if let Some(logger) = default_logger() {
            log::Log::log(&**logger, record);
        }
    }

    fn flush(&self) {
        if let Some(logger) = default_logger() {
            log::Log::flush(&**logger);
        }
    }
}

/// Set up the log crate global logger.
///
/// This function calls [`log::set_logger`] to set up a `LogCrateLogger` and all logs from log
/// crate will be forwarded to the [default logger](crate::default_logger).
///
/// This should be called early in the execution of a Rust program. Any log events that occur
/// before initialization will be ignored.
///
/// This function will set the global maximum log level to `Trace`. To override this, call
/// [`log::set_max_level`] after this function.
///
/// # Errors
///
/// Return an error if the log crate global logger has already been set.
pub fn try_setup_log_crate() -> Result<(), log::SetLoggerError> {
    static LOGGER: LogCrateLogger = LogCrateLogger(());
    log::set_logger(&LOGGER)?;
    log::set_max_level(log::LevelFilter::Trace);
    Ok(())
}

/// Set up the log crate global logger.
///
/// This function calls [`log::set_logger`] to set up a `LogCrateLogger` and all logs from log
/// crate will be forwarded to the [default logger](crate::default_logger).
///
/// This function will set the global maximum log level to `Trace`. To override this, call
/// [`log::set_max_level`] after this function.
///
/// # Panics
///
/// Panic if the log crate global logger has already been set.
///
/// # Examples
///
/// ```
/// logmux::bridge::setup_log_crate();
/// ```
pub fn setup_log_crate() {
    try_setup_log_crate().expect(
        "logmux::bridge::setup_log_crate must be called before the log crate global logger initialized",
    )
}

/// A logger can also be installed directly with [`log::set_boxed_logger`], bypassing the
/// default logger.
impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        let metadata = Metadata::new(
            Level::from(metadata.level()),
            metadata.target(),
            Origin::LogCrate,
        );
        self.enabled_for(&metadata)
    }

    fn log(&self, record: &log::Record) {
        let location = Location::new(
            record.file().unwrap_or_default(),
            record.line().unwrap_or_default(),
            record.module_path().unwrap_or_default(),
        );

        self.log_record(
            &Record::builder()
                .args(*record.args())
                .level(Level::from(record.level()))
                .target(record.target())
                .origin(Origin::LogCrate)
                .location(location)
                .build(),
        );
    }

    fn flush(&self) {
        Logger::flush(self);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::Mutex;

    use log::Log;

    use crate::Append;
    use crate::Error;
    use crate::LevelFilter;
    use crate::Record;
    use crate::record::Origin;

    #[derive(Debug, Default, Clone)]
    struct Seen(Arc<Mutex<Vec<(Origin, String, String, String)>>>);

    impl Append for Seen {
        fn append(&self, record: &Record) -> Result<(), Error> {
            self.0.lock().unwrap().push((
                record.origin(),
                record.target().to_string(),
                record.location().function().to_string(),
                record.args().to_string(),
            ));
            Ok(())
        }
    }

    #[test]
    fn log_crate_records_are_forwarded() {
        let seen = Seen::default();
        let logger = crate::builder()
            .filter(LevelFilter::Info)
            .append(seen.clone())
            .build()
            .unwrap();

        let metadata = log::MetadataBuilder::new()
            .level(log::Level::Debug)
            .target("net")
            .build();
        assert!(!Log::enabled(&*logger, &metadata));

        Log::log(
            &*logger,
            &log::Record::builder()
                .args(format_args!("connected"))
                .level(log::Level::Warn)
                .target("net")
                .module_path(Some("app::net"))
                .file(Some("src/net.rs"))
                .line(Some(7))
                .build(),
        );

        let seen = seen.0.lock().unwrap();
        assert_eq!(
            *seen,
            [(
                Origin::LogCrate,
                "net".to_string(),
                "app::net".to_string(),
                "connected".to_string(),
            )]
        );
    }
}
