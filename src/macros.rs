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

//! Call-site macros.
//!
//! Each macro captures a [`Location`](crate::Location) (file, line and enclosing function) and
//! logs either to an explicit `logger: <expr>` or to the [default logger](crate::default_logger).
//! Without a default logger installed, the latter form does nothing.

#[doc(hidden)]
pub mod __private {
    pub fn type_name_of<T>(_: T) -> &'static str {
        std::any::type_name::<T>()
    }

    /// Trim the helper item and closure segments off a function path.
    pub fn trim_function_path(path: &'static str) -> &'static str {
        let mut path = path.strip_suffix("::__f").unwrap_or(path);
        while let Some(outer) = path.strip_suffix("::{{closure}}") {
            path = outer;
        }
        path
    }
}

#[doc(hidden)]
#[macro_export]
macro_rules! __function_path {
    () => {{
        fn __f() {}
        $crate::__private::trim_function_path($crate::__private::type_name_of(__f))
    }};
}

/// Capture the [`Location`](crate::Location) of the call site.
///
/// # Examples
///
/// ```
/// fn handler() -> logmux::Location<'static> {
///     logmux::location!()
/// }
///
/// assert_eq!(handler().function_name(), "handler");
/// ```
#[macro_export]
macro_rules! location {
    () => {
        $crate::Location::new(file!(), line!(), $crate::__function_path!())
    };
}

/// Log a message at the given level.
///
/// # Examples
///
/// ```
/// use logmux::Level;
/// use logmux::append;
///
/// let logger = logmux::builder()
///     .append(append::Stdout::default())
///     .build()
///     .unwrap();
///
/// logmux::log!(logger: logger, Level::Debug, "cache size: {}", 512);
/// // a no-op unless a default logger is installed
/// logmux::log!(Level::Debug, "cache size: {}", 512);
/// ```
#[macro_export]
macro_rules! log {
    (logger: $logger:expr, $level:expr, $($arg:tt)+) => {{
        let logger: &$crate::Logger = &$logger;
        let level: $crate::Level = $level;
        $crate::Logger::log(logger, level, $crate::location!(), format_args!($($arg)+));
    }};
    ($level:expr, $($arg:tt)+) => {{
        if let Some(logger) = $crate::default_logger() {
            $crate::log!(logger: logger, $level, $($arg)+);
        }
    }};
}

/// Log a message at the trace level.
#[macro_export]
macro_rules! trace {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log!(logger: $logger, $crate::Level::Trace, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::Level::Trace, $($arg)+)
    };
}

/// Log a message at the debug level.
#[macro_export]
macro_rules! debug {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log!(logger: $logger, $crate::Level::Debug, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::Level::Debug, $($arg)+)
    };
}

/// Log a message at the info level.
///
/// # Examples
///
/// ```
/// use logmux::append;
///
/// let logger = logmux::builder()
///     .append(append::Stdout::default())
///     .build()
///     .unwrap();
///
/// let port = 8080;
/// logmux::info!(logger: logger, "listening on port {port}");
/// ```
#[macro_export]
macro_rules! info {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log!(logger: $logger, $crate::Level::Info, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::Level::Info, $($arg)+)
    };
}

/// Log a message at the warning level.
#[macro_export]
macro_rules! warn {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log!(logger: $logger, $crate::Level::Warn, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::Level::Warn, $($arg)+)
    };
}

/// Log a message at the error level.
#[macro_export]
macro_rules! error {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log!(logger: $logger, $crate::Level::Error, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::Level::Error, $($arg)+)
    };
}

/// Log a message at the critical level.
///
/// On a debug channel, critical messages are emitted as critical with a `CRITICAL: ` prefix.
#[macro_export]
macro_rules! critical {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log!(logger: $logger, $crate::Level::Critical, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::Level::Critical, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::Mutex;

    use super::__private::trim_function_path;
    use crate::Append;
    use crate::Error;
    use crate::Level;
    use crate::Record;

    #[derive(Debug, Default, Clone)]
    struct Seen(Arc<Mutex<Vec<String>>>);

    impl Append for Seen {
        fn append(&self, record: &Record) -> Result<(), Error> {
            let location = record.location();
            self.0.lock().unwrap().push(format!(
                "{} [{}:{}] [{}] {}",
                record.level(),
                location.file_name(),
                location.line(),
                location.function(),
                record.args(),
            ));
            Ok(())
        }
    }

    #[test]
    fn trims_helper_and_closures() {
        assert_eq!(trim_function_path("app::run::__f"), "app::run");
        assert_eq!(
            trim_function_path("app::run::{{closure}}::{{closure}}::__f"),
            "app::run"
        );
        assert_eq!(trim_function_path("app::run"), "app::run");
    }

    #[test]
    fn location_names_the_enclosing_function() {
        let location = crate::location!();
        assert_eq!(location.file_name(), "macros.rs");
        assert_eq!(
            location.function(),
            "logmux::macros::tests::location_names_the_enclosing_function"
        );

        let in_closure = (|| crate::location!())();
        assert_eq!(
            in_closure.function_name(),
            "location_names_the_enclosing_function"
        );
    }

    #[test]
    fn macros_log_to_an_explicit_logger() {
        let seen = Seen::default();
        let logger = crate::builder().append(seen.clone()).build().unwrap();

        let line = line!() + 1;
        crate::info!(logger: logger, "answer is {}", 42);
        crate::warn!(logger: logger, "low disk");
        crate::error!(logger: &logger, "failed: {err}", err = "timeout");
        crate::critical!(logger: logger.clone(), "gone");
        crate::log!(logger: logger, Level::Debug, "debugging");

        let seen = seen.0.lock().unwrap();
        let function = "logmux::macros::tests::macros_log_to_an_explicit_logger";
        assert_eq!(seen.len(), 5);
        assert_eq!(
            seen[0],
            format!("info [macros.rs:{line}] [{function}] answer is 42")
        );
        assert_eq!(
            seen[2],
            format!("error [macros.rs:{}] [{function}] failed: timeout", line + 2)
        );
        assert!(seen[3].starts_with("critical "));
        assert!(seen[4].ends_with("debugging"));
    }
}
