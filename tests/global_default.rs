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

//! Installs the process-wide default logger, so it lives in its own test binary.

use std::sync::Arc;
use std::sync::Mutex;

use logmux::Append;
use logmux::Error;
use logmux::Origin;
use logmux::Record;
use logmux::channel::ChannelContext;
use logmux::channel::ChannelKind;

#[derive(Debug, Default, Clone)]
struct Seen(Arc<Mutex<Vec<(Origin, String)>>>);

impl Append for Seen {
    fn append(&self, record: &Record) -> Result<(), Error> {
        let line = format!("{} {}", record.level(), record.args());
        self.0.lock().unwrap().push((record.origin(), line));
        Ok(())
    }
}

#[test]
fn default_logger_receives_macros_and_log_crate() {
    assert!(logmux::default_logger().is_none());
    logmux::info!("nobody listens");
    logmux::shutdown();

    let seen = Seen::default();
    logmux::init_with(logmux::builder().append(seen.clone())).unwrap();
    assert!(logmux::default_logger().is_some());

    logmux::info!("from the facade");
    log::warn!("from the log crate");
    logmux::bridge::forward_to_default(
        ChannelKind::Fatal,
        &ChannelContext::default(),
        "from the host",
    );

    let again = logmux::builder().append(Seen::default()).build().unwrap();
    let err = logmux::set_default(again).unwrap_err();
    assert!(err.to_string().contains("already been set"));
    assert!(logmux::init_with(logmux::builder().append(Seen::default())).is_err());

    logmux::shutdown();

    assert_eq!(
        *seen.0.lock().unwrap(),
        [
            (Origin::Facade, "info from the facade".to_string()),
            (Origin::LogCrate, "warning from the log crate".to_string()),
            (Origin::Channel, "critical from the host".to_string()),
        ]
    );
}
