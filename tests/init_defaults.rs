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

//! Runs `init()` against the working directory, so it lives in its own test binary.

use std::env;
use std::fs;

use tempfile::TempDir;

#[test]
#[allow(unsafe_code)]
fn init_writes_filtered_lines_to_a_fresh_log_file() {
    let dir = TempDir::new().expect("failed to create a temporary directory");
    env::set_current_dir(dir.path()).unwrap();
    // SAFETY: this is the only test of the binary and nothing else reads the environment.
    unsafe { env::set_var(logmux::DEFAULT_LEVEL_ENV, "warn") };
    fs::write(logmux::DEFAULT_LOG_FILE, "stale line\n").unwrap();

    logmux::init().unwrap();

    logmux::info!("below the level");
    log::info!("below the level");
    let line = line!() + 1;
    logmux::warn!("disk at {}%", 91);
    log::error!(target: "storage", "write failed");
    logmux::critical!("out of memory, about to exit");

    // no shutdown: every line must already be on disk
    let content = fs::read_to_string(logmux::DEFAULT_LOG_FILE).unwrap();
    let lines = content.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 3, "{content}");
    assert!(!content.contains("stale line"));
    assert!(!content.contains("below the level"));

    let function = "init_writes_filtered_lines_to_a_fresh_log_file";
    for text in &lines {
        assert!(text.starts_with('['), "{text}");
        assert_eq!(&text[20..23], "] [", "{text}");
        assert!(!text.contains('\u{1b}'), "{text}");
    }
    assert!(
        lines[0].ends_with(&format!("] [warning] [init_defaults.rs:{line}] [{function}] disk at 91%")),
        "{}",
        lines[0]
    );
    assert!(lines[1].contains("] [error] [init_defaults.rs:"), "{}", lines[1]);
    assert!(lines[1].ends_with("] write failed"), "{}", lines[1]);
    assert!(
        lines[2].ends_with(&format!(
            "] [critical] [init_defaults.rs:{}] [{function}] out of memory, about to exit",
            line + 2
        )),
        "{}",
        lines[2]
    );

    // a second init must leave the installed logger's file alone
    let err = logmux::init().unwrap_err();
    assert!(err.to_string().contains("already been set"), "{err}");
    logmux::error!("still logging");

    let after = fs::read_to_string(logmux::DEFAULT_LOG_FILE).unwrap();
    assert!(after.starts_with(&content), "{after:?}");
    assert!(after.ends_with("still logging\n"), "{after:?}");
    assert!(!after.contains('\0'));

    logmux::shutdown();
}
