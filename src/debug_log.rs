use std::fmt::{self, Write as _};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use anyhow::{Context, Result};
use log::{debug, trace, warn};

use crate::env::{Clock, Console, DiskFs, FileSystem, Stdout, SystemClock};
use crate::paths;

/// Prefix on every line echoed to the console.
pub const CONSOLE_TAG: &str = "[AADKerberos] ";

/// Line terminator written to the log file.
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
/// Line terminator written to the log file.
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Appends debug text to a per-run log file and mirrors it to the console.
///
/// The file is picked lazily on first use: the first
/// `AzureAD-MSAL-{date}-{N}.log` in the log directory that does not already
/// exist. Once picked it never changes for the life of this logger.
///
/// One lock covers path resolution and every write, so a logger shared
/// between threads (e.g. behind an `Arc`) resolves exactly one file and never
/// interleaves partial entries.
pub struct DebugLogger {
    dir: PathBuf,
    clock: Box<dyn Clock>,
    fs: Box<dyn FileSystem>,
    console: Box<dyn Console>,
    path: Mutex<Option<PathBuf>>,
}

impl DebugLogger {
    /// Logger writing under `dir` with the real clock, disk, and stdout.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            clock: Box::new(SystemClock),
            fs: Box::new(DiskFs),
            console: Box::new(Stdout),
            path: Mutex::new(None),
        }
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn with_fs(mut self, fs: impl FileSystem + 'static) -> Self {
        self.fs = Box::new(fs);
        self
    }

    pub fn with_console(mut self, console: impl Console + 'static) -> Self {
        self.console = Box::new(console);
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// The log file this logger writes to, resolving it on first call.
    pub fn log_path(&self) -> Result<PathBuf> {
        let mut cached = self.lock();
        Ok(self.resolve(&mut cached)?.to_path_buf())
    }

    /// Format `args` and [`save`](Self::save) the result.
    ///
    /// Usually called through [`debug_log!`](crate::debug_log!). Fails if a
    /// `Display` impl among the arguments reports an error.
    pub fn format(&self, args: fmt::Arguments<'_>) -> Result<()> {
        let mut entry = String::new();
        entry
            .write_fmt(args)
            .context("failed to format log entry")?;
        self.save(&entry)
    }

    /// Echo `text` to the console and append it as one line to the log file.
    ///
    /// Only a failed file append is an error; a console failure is reported
    /// through `log` and the entry is still written.
    pub fn save(&self, text: &str) -> Result<()> {
        self.write_entry(text, &format!("{text}{LINE_ENDING}"))
    }

    /// Like [`save`](Self::save), but stamps the entry with the local time
    /// (`YYYY-MM-DDTHH:MM:SS: text`) and separates it from the previous entry
    /// in the file with a blank line.
    pub fn save_with_timestamp(&self, text: &str) -> Result<()> {
        let stamp = self.clock.now().format("%Y-%m-%dT%H:%M:%S");
        let message = format!("{stamp}: {text}");
        self.write_entry(&message, &format!("{LINE_ENDING}{message}{LINE_ENDING}"))
    }

    fn write_entry(&self, console_text: &str, file_text: &str) -> Result<()> {
        let mut cached = self.lock();
        let path = self.resolve(&mut cached)?;
        let echoed = self
            .console
            .print_line(&format!("{CONSOLE_TAG}{console_text}"));
        self.fs
            .append(path, file_text)
            .with_context(|| format!("failed to append to {}", path.display()))?;
        // A closed or broken console never costs the file its entry.
        if let Err(e) = echoed {
            warn!("debug log entry not mirrored to console: {e}");
        }
        Ok(())
    }

    fn lock(&self) -> MutexGuard<'_, Option<PathBuf>> {
        // Poison is ignored: the path is only ever replaced whole.
        self.path.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn resolve<'a>(&self, cached: &'a mut Option<PathBuf>) -> Result<&'a Path> {
        match *cached {
            Some(ref path) => Ok(path.as_path()),
            None => {
                let path = self.first_unused_path()?;
                Ok(cached.insert(path).as_path())
            }
        }
    }

    fn first_unused_path(&self) -> Result<PathBuf> {
        let date = self.clock.now().date();
        let path = (1..=u32::MAX)
            .map(|i| paths::candidate_path(&self.dir, date, i))
            .find(|p| {
                let taken = self.fs.exists(p);
                if taken {
                    trace!("debug log candidate taken: {}", p.display());
                }
                !taken
            })
            .with_context(|| {
                format!(
                    "no unused debug log name for {date} in {}",
                    self.dir.display()
                )
            })?;
        debug!("debug log path resolved: {}", path.display());
        Ok(path)
    }
}

/// Format and save an entry: `debug_log!(logger, "user {} got {} tickets", name, n)`.
///
/// Expands to [`DebugLogger::format`] and evaluates to its `Result`.
#[macro_export]
macro_rules! debug_log {
    ($logger:expr, $($arg:tt)*) => {
        $logger.format(::std::format_args!($($arg)*))
    };
}
