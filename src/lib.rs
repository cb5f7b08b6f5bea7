//! Debug logging for Kerberos ticket troubleshooting.
//!
//! A [`DebugLogger`] appends plain-text entries to a per-run
//! `AzureAD-MSAL-{date}-{N}.log` file and echoes each one to the console with
//! an `[AADKerberos]` tag. [`render_map`] and [`render_list`] turn string
//! tables and lists into text suitable for those entries.

pub mod debug_log;
pub mod env;
pub mod paths;
pub mod render;

pub use debug_log::{DebugLogger, CONSOLE_TAG, LINE_ENDING};
pub use env::{Clock, Console, DiskFs, FileSystem, Stdout, SystemClock};
pub use paths::{default_log_dir, FILE_PREFIX};
pub use render::{render_list, render_map};
