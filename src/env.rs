//! The outside world as seen by [`DebugLogger`](crate::DebugLogger).
//!
//! Wall-clock time, the filesystem, and the console are each behind a small
//! trait so tests can substitute deterministic fakes. The real implementations
//! are [`SystemClock`], [`DiskFs`], and [`Stdout`].

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use chrono::{Local, NaiveDateTime};

/// Source of local wall-clock time.
pub trait Clock: Send + Sync {
    /// Current local date and time, without a zone.
    fn now(&self) -> NaiveDateTime;
}

/// The storage operations the logger needs: probing for a file and appending.
pub trait FileSystem: Send + Sync {
    /// Whether anything exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Append `text` to `path`, creating the file if it is absent.
    ///
    /// The parent directory is not created; a missing directory is an error.
    fn append(&self, path: &Path, text: &str) -> io::Result<()>;
}

/// Where mirrored log lines are echoed.
pub trait Console: Send + Sync {
    /// Write one line. The implementation supplies the line terminator.
    fn print_line(&self, line: &str) -> io::Result<()>;
}

/// Reads the local time via `chrono::Local`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// The real filesystem. Each append opens, writes, and closes the file.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiskFs;

impl FileSystem for DiskFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn append(&self, path: &Path, text: &str) -> io::Result<()> {
        let mut f = OpenOptions::new().create(true).append(true).open(path)?;
        f.write_all(text.as_bytes())?;
        f.flush()
    }
}

/// Process standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct Stdout;

impl Console for Stdout {
    fn print_line(&self, line: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{line}")?;
        out.flush()
    }
}
