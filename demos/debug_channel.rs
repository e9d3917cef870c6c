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

//! Emits records on a debug channel drained by a "GUI" thread, and feeds the host's own
//! messages back into the console.

use std::thread;

use logmux::LevelFilter;
use logmux::append;
use logmux::bridge::ChannelBridge;
use logmux::channel::ChannelContext;
use logmux::channel::ChannelKind;
use logmux::channel::ChannelMessage;

fn main() {
    let (sender, receiver) = crossbeam_channel::unbounded::<ChannelMessage>();

    let logger = logmux::builder()
        .filter(LevelFilter::Debug)
        .append(append::Stdout::default())
        .append(append::Channel::new(sender))
        .build()
        .unwrap();

    let gui = thread::spawn(move || {
        for message in receiver {
            println!("  gui log window <{}> {}", message.kind, message.text);
        }
    });

    logmux::info!(logger: logger, "main window created");
    logmux::warn!(logger: logger, "theme {:?} not found", "dark");
    logmux::critical!(logger: logger, "render device lost");

    let bridge = ChannelBridge::new(logger.clone());
    let context = ChannelContext {
        file: Some("qwidget.cpp"),
        line: 1021,
        function: Some("QWidget::repaint"),
        category: Some("qt.widgets"),
    };
    bridge.forward(ChannelKind::Warning, &context, "recursive repaint detected");

    logger.shutdown();
    drop(bridge);
    drop(logger);
    gui.join().unwrap();
}
