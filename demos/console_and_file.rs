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

//! Logs to a colored console and a truncated `logs.txt`, flushed every five seconds.

fn load_config(path: &str) -> Result<(), String> {
    logmux::debug!("loading configuration from {path}");
    Err(format!("{path}: no such file"))
}

fn main() {
    logmux::init().unwrap();

    logmux::info!("application started");
    if let Err(err) = load_config("settings.toml") {
        logmux::warn!("falling back to defaults: {err}");
    }
    logmux::error!("failed to connect to {}", "db.internal:5432");
    logmux::critical!("out of memory");
    log::info!("records of the log crate end up in the same sinks");

    logmux::shutdown();
}
