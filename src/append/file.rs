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

use std::fs;
use std::fs::OpenOptions;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::MutexGuard;

use crate::Error;
use crate::Layout;
use crate::Level;
use crate::append::Append;
use crate::layout::TextLayout;
use crate::record::Record;

/// A builder to configure and create a [`File`] appender.
#[derive(Debug)]
pub struct FileBuilder {
    path: PathBuf,
    truncate: bool,
    flush_level: Option<Level>,
    layout: Box<dyn Layout>,
}

impl FileBuilder {
    /// Create a new builder for the log file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            truncate: true,
            flush_level: Some(Level::Error),
            layout: Box::new(TextLayout::default().no_color()),
        }
    }

    /// Whether to truncate an existing file when it is opened.
    ///
    /// Default to `true`. When `false`, new lines are appended to the existing content.
    pub fn truncate(mut self, truncate: bool) -> Self {
        self.truncate = truncate;
        self
    }

    /// Flush the buffer right after writing any record at or above `level`.
    ///
    /// Default to [`Level::Error`]. Lines below it stay buffered until the next flush, and are
    /// lost if the process exits before that. Use [`Level::Trace`] to put every line on disk
    /// immediately.
    pub fn flush_level(mut self, level: Level) -> Self {
        self.flush_level = Some(level);
        self
    }

    /// Never flush on write, only on explicit or periodic flushes.
    pub fn no_flush_level(mut self) -> Self {
        self.flush_level = None;
        self
    }

    /// Sets the layout for the logs.
    ///
    /// Default to [`TextLayout`] without colors.
    pub fn layout(mut self, layout: impl Into<Box<dyn Layout>>) -> Self {
        self.layout = layout.into();
        self
    }

    /// Build the [`File`] appender.
    ///
    /// # Errors
    ///
    /// Returns an error if the log directory or the log file cannot be created.
    pub fn build(self) -> Result<File, Error> {
        let FileBuilder {
            path,
            truncate,
            flush_level,
            layout,
        } = self;

        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|err| {
                Error::new("failed to create log directory")
                    .with_context("path", dir.display())
                    .with_source(err)
            })?;
        }

        let mut options = OpenOptions::new();
        options.create(true);
        if truncate {
            options.write(true).truncate(true);
        } else {
            options.append(true);
        }
        let file = options.open(&path).map_err(|err| {
            Error::new("failed to open log file")
                .with_context("path", path.display())
                .with_source(err)
        })?;

        Ok(File {
            path,
            flush_level,
            layout,
            writer: Mutex::new(BufWriter::new(file)),
        })
    }
}

/// An appender that writes log records to a single plain-text file.
///
/// Lines are buffered in memory until [`flush`](Append::flush) is called, either explicitly or
/// by the logger's periodic flush. Records at or above the
/// [flush level](FileBuilder::flush_level) are flushed as soon as they are written.
///
/// # Examples
///
/// ```
/// use logmux::append::FileBuilder;
///
/// let dir = tempfile::tempdir().unwrap();
/// let file = FileBuilder::new(dir.path().join("logs.txt")).build().unwrap();
/// ```
#[derive(Debug)]
pub struct File {
    path: PathBuf,
    flush_level: Option<Level>,
    layout: Box<dyn Layout>,
    writer: Mutex<BufWriter<fs::File>>,
}

impl File {
    /// The path of the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn writer(&self) -> Result<MutexGuard<'_, BufWriter<fs::File>>, Error> {
        self.writer.lock().map_err(|_| {
            Error::new("log file writer is poisoned").with_context("path", self.path.display())
        })
    }
}

impl Append for File {
    fn append(&self, record: &Record) -> Result<(), Error> {
        let mut bytes = self.layout.format(record)?;
        bytes.push(b'\n');

        let mut writer = self.writer()?;
        writer.write_all(&bytes).map_err(Error::from_io_error)?;
        if self
            .flush_level
            .is_some_and(|flush_level| record.level() >= flush_level)
        {
            writer.flush().map_err(Error::from_io_error)?;
        }
        Ok(())
    }

    fn flush(&self) -> Result<(), Error> {
        self.writer()?.flush().map_err(Error::from_io_error)?;
        Ok(())
    }
}

impl Drop for File {
    fn drop(&mut self) {
        let writer = match self.writer.get_mut() {
            Ok(writer) => writer,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Err(err) = writer.flush() {
            eprintln!("failed to flush log file {}: {err}", self.path.display());
        }
    }
}
