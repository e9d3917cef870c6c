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

//! Provides [`env_filter`](https://crates.io/crates/env_filter) based filter for log records.

use std::borrow::Cow;
use std::str::FromStr;

use crate::Error;
use crate::LevelFilter;
use crate::filter::Filter;
use crate::filter::FilterResult;
use crate::record::Metadata;

/// The default environment variable for filtering logs.
pub const DEFAULT_FILTER_ENV: &str = "RUST_LOG";

/// A filter consists of one or more comma-separated directives which match on the record target.
///
/// The directive syntax is that of [`env_logger`](https://crates.io/crates/env_logger), e.g.
/// `info,my_crate::net=debug`. Directives only know the levels of the [`log`] crate, so
/// `critical` records are matched as `error`.
#[derive(Debug)]
pub struct EnvFilter(env_filter::Filter);

impl EnvFilter {
    /// Initializes the filter from the [`EnvFilterBuilder`].
    pub fn new(mut builder: EnvFilterBuilder) -> Self {
        EnvFilter(builder.0.build())
    }

    /// Initializes the filter from the environment using default variable name `RUST_LOG`.
    pub fn from_default_env() -> Self {
        EnvFilter::from_env(DEFAULT_FILTER_ENV)
    }

    /// Initializes the filter from the environment using a specific variable name.
    ///
    /// # Examples
    ///
    /// ```
    /// use logmux::filter::EnvFilter;
    /// let filter = EnvFilter::from_env("MY_LOG");
    /// ```
    pub fn from_env<'a, E>(name: E) -> Self
    where
        E: Into<Cow<'a, str>>,
    {
        let name = name.into();

        let builder = EnvFilterBuilder::new();
        if let Ok(s) = std::env::var(&*name) {
            EnvFilter::new(builder.parse(&s))
        } else {
            EnvFilter::new(builder)
        }
    }

    /// Initializes the filter from the environment using a specific variable name. If the
    /// variable is not set, the default value is used.
    ///
    /// # Examples
    ///
    /// ```
    /// use logmux::filter::EnvFilter;
    /// let filter = EnvFilter::from_env_or("MY_LOG", "trace");
    /// ```
    pub fn from_env_or<'a, 'b, E, V>(name: E, default: V) -> Self
    where
        E: Into<Cow<'a, str>>,
        V: Into<Cow<'b, str>>,
    {
        let name = name.into();
        let default = default.into();

        let builder = EnvFilterBuilder::new();
        if let Ok(s) = std::env::var(&*name) {
            EnvFilter::new(builder.parse(&s))
        } else {
            EnvFilter::new(builder.parse(&default))
        }
    }
}

impl Filter for EnvFilter {
    fn enabled(&self, metadata: &Metadata) -> FilterResult {
        let metadata = log::MetadataBuilder::new()
            .level(metadata.level().to_log_level())
            .target(metadata.target())
            .build();

        if self.0.enabled(&metadata) {
            FilterResult::Neutral
        } else {
            FilterResult::Reject
        }
    }
}

impl From<LevelFilter> for EnvFilter {
    fn from(filter: LevelFilter) -> Self {
        EnvFilter::new(EnvFilterBuilder::new().filter_level(filter))
    }
}

impl<'a> From<&'a str> for EnvFilter {
    fn from(filter: &'a str) -> Self {
        EnvFilter::new(EnvFilterBuilder::new().parse(filter))
    }
}

impl FromStr for EnvFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EnvFilterBuilder::new().try_parse(s).map(EnvFilter::new)
    }
}

/// A builder for the env log filter.
///
/// It can be used to parse a set of directives from a string before building an [`EnvFilter`]
/// instance.
#[derive(Default, Debug)]
pub struct EnvFilterBuilder(env_filter::Builder);

impl EnvFilterBuilder {
    /// Initializes the filter builder with defaults.
    pub fn new() -> Self {
        EnvFilterBuilder(env_filter::Builder::new())
    }

    /// Adds a directive to the filter for a specific module.
    pub fn filter_module(mut self, module: &str, level: LevelFilter) -> Self {
        self.0.filter_module(module, level.to_log_level_filter());
        self
    }

    /// Adds a directive to the filter for all modules.
    pub fn filter_level(mut self, level: LevelFilter) -> Self {
        self.0.filter_level(level.to_log_level_filter());
        self
    }

    /// Parses the directive string, returning an error if the given directive string is invalid.
    pub fn try_parse(mut self, filters: &str) -> Result<Self, Error> {
        self.0.try_parse(filters).map_err(|err| {
            Error::new("failed to parse filter directives")
                .with_context("directives", filters)
                .with_source(anyhow::anyhow!("{err}"))
        })?;
        Ok(self)
    }

    /// Parses the directive string. Invalid directives are reported on stderr and skipped.
    pub fn parse(mut self, filters: &str) -> Self {
        self.0.parse(filters);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Level;
    use crate::record::Origin;

    fn check(filter: &EnvFilter, level: Level, target: &str) -> FilterResult {
        filter.enabled(&Metadata::new(level, target, Origin::Facade))
    }

    #[test]
    fn directives_apply_per_target() {
        let filter: EnvFilter = "warn,my_app::net=debug".parse().unwrap();
        assert_eq!(check(&filter, Level::Info, "my_app"), FilterResult::Reject);
        assert_eq!(check(&filter, Level::Warn, "my_app"), FilterResult::Neutral);
        assert_eq!(
            check(&filter, Level::Debug, "my_app::net"),
            FilterResult::Neutral
        );
        assert_eq!(
            check(&filter, Level::Trace, "my_app::net"),
            FilterResult::Reject
        );
    }

    #[test]
    fn critical_is_matched_as_error() {
        let filter = EnvFilter::from(LevelFilter::Error);
        assert_eq!(check(&filter, Level::Critical, "app"), FilterResult::Neutral);
        assert_eq!(check(&filter, Level::Warn, "app"), FilterResult::Reject);
    }

    #[test]
    fn invalid_directives_are_errors() {
        let err = "my_app=loud".parse::<EnvFilter>().unwrap_err();
        assert!(err.to_string().contains("failed to parse filter directives"));
    }

    #[test]
    fn missing_env_var_falls_back_to_default() {
        let filter = EnvFilter::from_env_or("LOGMUX_TEST_UNSET_VARIABLE", "error");
        assert_eq!(check(&filter, Level::Warn, "app"), FilterResult::Reject);
        assert_eq!(check(&filter, Level::Error, "app"), FilterResult::Neutral);
    }
}
