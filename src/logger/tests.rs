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
use std::sync::Mutex;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::time::Duration;
use std::time::Instant;

use crate::Append;
use crate::Error;
use crate::Level;
use crate::LevelFilter;
use crate::Location;
use crate::Record;
use crate::Trap;
use crate::filter::CustomFilter;
use crate::filter::EnvFilter;
use crate::filter::FilterResult;

#[derive(Debug, Default, Clone)]
struct Collect {
    lines: Arc<Mutex<Vec<String>>>,
    flushes: Arc<AtomicUsize>,
}

impl Collect {
    fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl Append for Collect {
    fn append(&self, record: &Record) -> Result<(), Error> {
        let line = format!("{} {}", record.level(), record.args());
        self.lines.lock().unwrap().push(line);
        Ok(())
    }

    fn flush(&self) -> Result<(), Error> {
        self.flushes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[derive(Debug)]
struct Broken;

impl Append for Broken {
    fn append(&self, _: &Record) -> Result<(), Error> {
        Err(Error::new("disk on fire"))
    }
}

#[derive(Debug, Default, Clone)]
struct Captured(Arc<Mutex<Vec<String>>>);

impl Trap for Captured {
    fn trap(&self, err: &Error) {
        self.0.lock().unwrap().push(err.to_string());
    }
}

fn here() -> Location<'static> {
    Location::new("src/app/main.rs", 42, "app::main::run")
}

#[test]
fn every_dispatch_sees_accepted_records() {
    let all = Collect::default();
    let errors = Collect::default();
    let logger = crate::builder()
        .append(all.clone())
        .append(crate::append::Testing::default())
        .dispatch()
        .filter(LevelFilter::Error)
        .append(errors.clone())
        .build()
        .unwrap();

    logger.info(here(), format_args!("started {}", 1));
    logger.error(here(), format_args!("failed"));
    logger.critical(here(), format_args!("gone"));

    assert_eq!(all.lines(), ["info started 1", "error failed", "critical gone"]);
    assert_eq!(errors.lines(), ["error failed", "critical gone"]);
}

#[test]
fn enabled_reflects_filters() {
    let logger = crate::builder()
        .filter(LevelFilter::Warn)
        .append(Collect::default())
        .build()
        .unwrap();

    assert!(!logger.enabled(Level::Info, "app"));
    assert!(logger.enabled(Level::Warn, "app"));
    assert!(logger.enabled(Level::Critical, "app"));
}

#[test]
fn target_is_the_module_of_the_function() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let filter = {
        let seen = seen.clone();
        CustomFilter::new(move |metadata| {
            seen.lock().unwrap().push(metadata.target().to_string());
            FilterResult::Neutral
        })
    };
    let logger = crate::builder()
        .filter(filter)
        .append(Collect::default())
        .build()
        .unwrap();

    logger.warn(here(), format_args!("slow"));
    logger.warn(Location::new("main.rs", 1, "main"), format_args!("slow"));
    logger.warn(
        Location::new("conn.rs", 9, "<app::net::Conn as app::Transport>::send"),
        format_args!("slow"),
    );
    logger.warn(
        Location::new("conn.rs", 9, "<app::net::Conn>::send"),
        format_args!("slow"),
    );

    assert_eq!(
        *seen.lock().unwrap(),
        ["app::main", "main", "app::net::Conn", "app::net::Conn"]
    );
}

#[test]
fn env_filter_matches_trait_method_targets() {
    let sink = Collect::default();
    let logger = crate::builder()
        .filter(EnvFilter::from("error,app::net=debug"))
        .append(sink.clone())
        .build()
        .unwrap();

    let method = Location::new("conn.rs", 9, "<app::net::Conn as app::Transport>::send");
    logger.log(Level::Debug, method, format_args!("sent 3 bytes"));
    logger.log(Level::Debug, here(), format_args!("hidden"));

    assert_eq!(sink.lines(), ["debug sent 3 bytes"]);
}

#[test]
fn append_errors_go_to_the_trap() {
    let trap = Captured::default();
    let sink = Collect::default();
    let logger = crate::builder()
        .append(Broken)
        .append(sink.clone())
        .trap(trap.clone())
        .build()
        .unwrap();

    logger.warn(here(), format_args!("still delivered"));

    assert_eq!(sink.lines(), ["warning still delivered"]);
    let trapped = trap.0.lock().unwrap();
    assert_eq!(trapped.len(), 1);
    assert!(trapped[0].contains("disk on fire"), "{}", trapped[0]);
    assert!(trapped[0].contains("operation: append"), "{}", trapped[0]);
}

#[test]
fn periodic_flush_runs_until_shutdown() {
    let sink = Collect::default();
    let logger = crate::builder()
        .append(sink.clone())
        .flush_every(Duration::from_millis(10))
        .build()
        .unwrap();

    let deadline = Instant::now() + Duration::from_secs(5);
    while sink.flushes.load(Ordering::SeqCst) < 2 {
        assert!(Instant::now() < deadline, "flusher never ran");
        std::thread::sleep(Duration::from_millis(5));
    }

    logger.shutdown();
    let after_shutdown = sink.flushes.load(Ordering::SeqCst);
    std::thread::sleep(Duration::from_millis(50));
    assert_eq!(sink.flushes.load(Ordering::SeqCst), after_shutdown);

    logger.shutdown();
    assert_eq!(sink.flushes.load(Ordering::SeqCst), after_shutdown + 1);
}

#[test]
fn dropping_the_logger_flushes() {
    let sink = Collect::default();
    let logger = crate::builder()
        .append(sink.clone())
        .flush_every(Duration::from_secs(3600))
        .build()
        .unwrap();

    drop(logger);
    assert_eq!(sink.flushes.load(Ordering::SeqCst), 1);
}
