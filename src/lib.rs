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

//! Logmux is a logging facade that fans each message out to a colored console, a plain-text log
//! file and, optionally, the debug channel of a GUI framework.
//!
//! # Overview
//!
//! A [`Logger`] is built with a [`builder`] from one or more dispatches, each a set of
//! [`Filter`]s followed by [`Append`]s, and shared as an `Arc<Logger>`. The macros capture the
//! call site (file, line and enclosing function) and log either to an explicit logger or to the
//! process-wide default one installed with [`set_default`] or [`init`]. Records of the `log` crate
//! can be forwarded to the default logger as well.
//!
//! # Examples
//!
//! Setup with a console and a `logs.txt` file, flushed every five seconds:
//!
//! ```no_run
//! logmux::init().unwrap();
//!
//! logmux::info!("This is an info message.");
//! logmux::critical!("This is a critical message.");
//!
//! logmux::shutdown();
//! ```
//!
//! An explicit logger with a debug channel next to the console:
//!
//! ```
//! use logmux::LevelFilter;
//! use logmux::append;
//! use logmux::channel::FnChannel;
//!
//! let logger = logmux::builder()
//!     .filter(LevelFilter::Info)
//!     .append(append::Stdout::default())
//!     .append(append::Channel::new(FnChannel::new(|kind, text| {
//!         eprintln!("[{kind}] {text}");
//!     })))
//!     .build()
//!     .unwrap();
//!
//! logmux::warn!(logger: logger, "Low disk space: {}%", 3);
//! logger.shutdown();
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod append;
pub mod bridge;
pub mod channel;
pub mod filter;
pub mod layout;

mod error;
mod global;
mod level;
mod logger;
mod macros;
mod record;
mod trap;

#[doc(hidden)]
pub use macros::__private;

pub use append::Append;
pub use error::Error;
pub use filter::Filter;
pub use global::DEFAULT_LEVEL_ENV;
pub use global::default_logger;
pub use global::init;
pub use global::init_with;
pub use global::set_default;
pub use global::shutdown;
pub use layout::Layout;
pub use level::Level;
pub use level::LevelFilter;
pub use level::ParseLevelError;
pub use logger::*;
pub use record::Location;
pub use record::Metadata;
pub use record::Origin;
pub use record::Record;
pub use record::RecordBuilder;
pub use trap::DefaultTrap;
pub use trap::Trap;
