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

use std::sync::Arc;

use crate::Logger;
use crate::channel::ChannelContext;
use crate::channel::ChannelKind;
use crate::default_logger;
use crate::record::Location;
use crate::record::Origin;
use crate::record::Record;

const DEFAULT_TARGET: &str = "channel";

/// Turns messages of a host debug channel into records on a [`Logger`].
///
/// Install [`ChannelBridge::forward`] as the host's message handler. Forwarded records carry
/// [`Origin::Channel`], so a [`Channel`](crate::append::Channel) appender on the same logger
/// does not send them back to the host.
///
/// # Examples
///
/// ```
/// use logmux::append;
/// use logmux::bridge::ChannelBridge;
/// use logmux::channel::ChannelContext;
/// use logmux::channel::ChannelKind;
///
/// let logger = logmux::builder()
///     .append(append::Stdout::default())
///     .build()
///     .unwrap();
/// let bridge = ChannelBridge::new(logger);
///
/// let context = ChannelContext {
///     file: Some("widget.cpp"),
///     line: 120,
///     function: Some("Widget::paint"),
///     category: None,
/// };
/// bridge.forward(ChannelKind::Warning, &context, "painter not active");
/// ```
#[derive(Debug, Clone)]
pub struct ChannelBridge {
    logger: Arc<Logger>,
}

impl ChannelBridge {
    /// Create a bridge logging to `logger`.
    pub fn new(logger: Arc<Logger>) -> Self {
        Self { logger }
    }

    /// Return the logger this bridge forwards to.
    pub fn logger(&self) -> &Arc<Logger> {
        &self.logger
    }

    /// Log one host message at the level mapped from `kind`.
    pub fn forward(&self, kind: ChannelKind, context: &ChannelContext, text: &str) {
        forward_to(&self.logger, kind, context, text);
    }
}

/// Log one host message on the [default logger](crate::default_logger).
///
/// Does nothing when no default logger is installed. This is the shape of handler hosts that
/// only accept a plain function pointer need.
pub fn forward_to_default(kind: ChannelKind, context: &ChannelContext, text: &str) {
    if let Some(logger) = default_logger() {
        forward_to(logger, kind, context, text);
    }
}

fn forward_to(logger: &Logger, kind: ChannelKind, context: &ChannelContext, text: &str) {
    let location = Location::new(
        context.file.unwrap_or_default(),
        context.line,
        context.function.unwrap_or_default(),
    );

    logger.log_record(
        &Record::builder()
            .args(format_args!("{text}"))
            .level(kind.level())
            .target(context.category.unwrap_or(DEFAULT_TARGET))
            .origin(Origin::Channel)
            .location(location)
            .build(),
    );
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::Mutex;

    use super::*;
    use crate::Append;
    use crate::Error;
    use crate::Level;
    use crate::append::Channel;
    use crate::channel::FnChannel;

    #[derive(Debug, Default, Clone)]
    struct Seen(Arc<Mutex<Vec<String>>>);

    impl Append for Seen {
        fn append(&self, record: &Record) -> Result<(), Error> {
            let location = record.location();
            self.0.lock().unwrap().push(format!(
                "{} {} {}:{} {} {}",
                record.level(),
                record.target(),
                location.file(),
                location.line(),
                location.function(),
                record.args(),
            ));
            Ok(())
        }
    }

    #[test]
    fn host_messages_become_records() {
        let seen = Seen::default();
        let logger = crate::builder().append(seen.clone()).build().unwrap();
        let bridge = ChannelBridge::new(logger);

        let context = ChannelContext {
            file: Some("widget.cpp"),
            line: 120,
            function: Some("Widget::paint"),
            category: Some("qt.widgets"),
        };
        bridge.forward(ChannelKind::Critical, &context, "painter not active");
        bridge.forward(ChannelKind::Fatal, &ChannelContext::default(), "{not a format}");

        assert_eq!(
            *seen.0.lock().unwrap(),
            [
                "error qt.widgets widget.cpp:120 Widget::paint painter not active",
                "critical channel :0  {not a format}",
            ]
        );
    }

    #[test]
    fn forwarded_messages_do_not_echo() {
        let emitted = Arc::new(Mutex::new(Vec::new()));
        let channel = {
            let emitted = emitted.clone();
            FnChannel::new(move |kind, text| {
                emitted.lock().unwrap().push((kind, text.to_string()));
            })
        };
        let seen = Seen::default();
        let logger = crate::builder()
            .append(Channel::new(channel))
            .append(seen.clone())
            .build()
            .unwrap();
        let bridge = ChannelBridge::new(logger.clone());

        bridge.forward(ChannelKind::Info, &ChannelContext::default(), "from the host");
        logger.log(Level::Info, crate::location!(), format_args!("from the app"));

        assert_eq!(seen.0.lock().unwrap().len(), 2);
        assert_eq!(
            *emitted.lock().unwrap(),
            [(ChannelKind::Info, "from the app".to_string())]
        );
    }
}
