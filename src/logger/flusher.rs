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

use std::sync::Weak;
use std::thread;
use std::thread::JoinHandle;
use std::time::Duration;

use crossbeam_channel::RecvTimeoutError;
use crossbeam_channel::Sender;

use crate::Error;
use crate::Logger;

/// A background thread that flushes a [`Logger`] on a fixed interval.
///
/// The thread holds a weak reference, so it never keeps the logger alive. It exits when the
/// logger is gone, when stopped, or when the [`Flusher`] is dropped.
#[derive(Debug)]
pub(super) struct Flusher {
    shutdown: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl Flusher {
    pub(super) fn spawn(
        logger: Weak<Logger>,
        interval: Duration,
        thread_name: String,
    ) -> Result<Self, Error> {
        let (shutdown, receiver) = crossbeam_channel::bounded::<()>(0);

        let handle = thread::Builder::new()
            .name(thread_name.clone())
            .spawn(move || {
                loop {
                    match receiver.recv_timeout(interval) {
                        Err(RecvTimeoutError::Timeout) => match logger.upgrade() {
                            Some(logger) => logger.flush(),
                            None => break,
                        },
                        Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                    }
                }
            })
            .map_err(|err| {
                Error::new("failed to spawn the periodic flush thread")
                    .with_context("thread", thread_name)
                    .with_source(err)
            })?;

        Ok(Flusher {
            shutdown: Some(shutdown),
            handle: Some(handle),
        })
    }

    /// Stop the thread and wait for it, unless called from the thread itself.
    pub(super) fn stop(&mut self) {
        // dropping the sender disconnects the receiver
        drop(self.shutdown.take());

        if let Some(handle) = self.handle.take() {
            if handle.thread().id() == thread::current().id() {
                return;
            }
            if handle.join().is_err() {
                eprintln!("the periodic flush thread panicked");
            }
        }
    }
}

impl Drop for Flusher {
    fn drop(&mut self) {
        self.stop();
    }
}
