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

//! Host debug channels.
//!
//! GUI frameworks usually come with their own stream of diagnostic messages, separate from any
//! logging library. This module defines the minimal capability logmux needs to talk to such a
//! stream in both directions:
//!
//! * outbound, a [`DebugChannel`] receives every record through the
//!   [`Channel`](crate::append::Channel) appender;
//! * inbound, a [`ChannelBridge`](crate::bridge::ChannelBridge) turns the host's messages into
//!   records on a [`Logger`](crate::Logger).

use std::fmt;
use std::sync::Arc;

use crate::Error;
use crate::Level;

/// The message types of a host debug channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChannelKind {
    /// Debug output.
    Debug,
    /// Informational output.
    Info,
    /// Warnings and recoverable errors.
    Warning,
    /// Critical errors.
    Critical,
    /// Fatal errors. Hosts usually abort after emitting one.
    Fatal,
}

impl ChannelKind {
    /// The channel kind a record of `level` is emitted as.
    ///
    /// Errors and criticals both map to [`ChannelKind::Critical`]; nothing maps to
    /// [`ChannelKind::Fatal`] since hosts abort on it.
    pub fn from_level(level: Level) -> Self {
        match level {
            Level::Trace | Level::Debug => ChannelKind::Debug,
            Level::Info => ChannelKind::Info,
            Level::Warn => ChannelKind::Warning,
            Level::Error | Level::Critical => ChannelKind::Critical,
        }
    }

    /// The level a message of this kind is logged at.
    pub fn level(&self) -> Level {
        match self {
            ChannelKind::Debug => Level::Debug,
            ChannelKind::Info => Level::Info,
            ChannelKind::Warning => Level::Warn,
            ChannelKind::Critical => Level::Error,
            ChannelKind::Fatal => Level::Critical,
        }
    }

    /// Return the string representation of the `ChannelKind`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChannelKind::Debug => "Debug",
            ChannelKind::Info => "Info",
            ChannelKind::Warning => "Warning",
            ChannelKind::Critical => "Critical",
            ChannelKind::Fatal => "Fatal",
        }
    }
}

impl fmt::Display for ChannelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// The context a host attaches to a debug message.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChannelContext<'a> {
    /// Source file of the message, if the host knows it.
    pub file: Option<&'a str>,
    /// Line of the message, `0` when unknown.
    pub line: u32,
    /// Enclosing function of the message, if the host knows it.
    pub function: Option<&'a str>,
    /// The host's logging category, used as the record target.
    pub category: Option<&'a str>,
}

/// A host debug channel that can receive formatted messages.
pub trait DebugChannel: fmt::Debug + Send + Sync + 'static {
    /// Emit one message of the given kind.
    fn emit(&self, kind: ChannelKind, text: &str) -> Result<(), Error>;
}

impl<C: DebugChannel + ?Sized> DebugChannel for Arc<C> {
    fn emit(&self, kind: ChannelKind, text: &str) -> Result<(), Error> {
        (**self).emit(kind, text)
    }
}

impl<C: DebugChannel + ?Sized> DebugChannel for Box<C> {
    fn emit(&self, kind: ChannelKind, text: &str) -> Result<(), Error> {
        (**self).emit(kind, text)
    }
}

/// A message handed to a GUI event loop through a [`crossbeam_channel`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChannelMessage {
    /// The message kind.
    pub kind: ChannelKind,
    /// The formatted message.
    pub text: String,
}

/// Sending into a channel lets a GUI thread drain messages at its own pace, e.g. into a log
/// window.
impl DebugChannel for crossbeam_channel::Sender<ChannelMessage> {
    fn emit(&self, kind: ChannelKind, text: &str) -> Result<(), Error> {
        let message = ChannelMessage {
            kind,
            text: text.to_string(),
        };
        self.send(message).map_err(|err| {
            Error::new("debug channel receiver is disconnected")
                .with_context("kind", err.0.kind)
        })
    }
}

/// A debug channel backed by a closure.
///
/// # Examples
///
/// ```
/// use logmux::channel::ChannelKind;
/// use logmux::channel::FnChannel;
///
/// let channel = FnChannel::new(|kind: ChannelKind, text: &str| {
///     eprintln!("[{kind}] {text}");
/// });
/// ```
pub struct FnChannel {
    f: Box<dyn Fn(ChannelKind, &str) + Send + Sync + 'static>,
}

impl fmt::Debug for FnChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FnChannel {{ ... }}")
    }
}

impl FnChannel {
    /// Create a debug channel from a closure.
    pub fn new(f: impl Fn(ChannelKind, &str) + Send + Sync + 'static) -> Self {
        FnChannel { f: Box::new(f) }
    }
}

impl DebugChannel for FnChannel {
    fn emit(&self, kind: ChannelKind, text: &str) -> Result<(), Error> {
        (self.f)(kind, text);
        Ok(())
    }
}
