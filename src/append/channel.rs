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

use crate::Error;
use crate::Layout;
use crate::Level;
use crate::append::Append;
use crate::channel::ChannelKind;
use crate::channel::DebugChannel;
use crate::layout::MessageLayout;
use crate::record::Origin;
use crate::record::Record;

/// An appender that emits log records on a host [`DebugChannel`].
///
/// The level is mapped with [`ChannelKind::from_level`], and critical messages are prefixed with
/// `CRITICAL: ` because the host cannot tell them apart from errors otherwise.
///
/// Records that came in from a debug channel ([`Origin::Channel`]) are not emitted again.
///
/// # Examples
///
/// ```
/// use logmux::append::Channel;
/// use logmux::channel::FnChannel;
///
/// let channel = Channel::new(FnChannel::new(|kind, text| eprintln!("{kind}: {text}")));
/// ```
#[derive(Debug)]
pub struct Channel<C> {
    channel: C,
    layout: Box<dyn Layout>,
}

impl<C: DebugChannel> Channel<C> {
    /// Create an appender emitting on `channel` with the [`MessageLayout`].
    pub fn new(channel: C) -> Self {
        Self {
            channel,
            layout: Box::new(MessageLayout::default()),
        }
    }

    /// Sets the layout of the emitted text.
    pub fn with_layout(mut self, layout: impl Into<Box<dyn Layout>>) -> Self {
        self.layout = layout.into();
        self
    }
}

impl<C: DebugChannel> Append for Channel<C> {
    fn append(&self, record: &Record) -> Result<(), Error> {
        if record.origin() == Origin::Channel {
            return Ok(());
        }

        let bytes = self.layout.format(record)?;
        let text = String::from_utf8_lossy(&bytes);
        let kind = ChannelKind::from_level(record.level());
        if record.level() == Level::Critical {
            self.channel.emit(kind, &format!("CRITICAL: {text}"))
        } else {
            self.channel.emit(kind, &text)
        }
    }
}
