//! Debug log directory defaults and file naming.
//!
//! Log files are named `AzureAD-MSAL-{date}-{index}.log`, where `date` is the
//! local calendar day (`YYYY-MM-DD`) and `index` counts up from 1. The
//! functions here are the single source of truth for that convention.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

/// File name prefix shared by every debug log file.
pub const FILE_PREFIX: &str = "AzureAD-MSAL-";

/// Resolve a conventional debug log directory.
/// Uses `$HOME/Documents`, then `%USERPROFILE%\Documents`, falls back to `./Documents`.
pub fn default_log_dir() -> PathBuf {
    log_dir_under(
        std::env::var_os("HOME").map(PathBuf::from),
        std::env::var_os("USERPROFILE").map(PathBuf::from),
    )
}

/// `Documents` under the first home directory that is set and non-empty.
fn log_dir_under(home: Option<PathBuf>, user_profile: Option<PathBuf>) -> PathBuf {
    home.into_iter()
        .chain(user_profile)
        .find(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from("."))
        .join("Documents")
}

/// Build the file name for a given day and index.
/// `2024-03-07`, `2` → `AzureAD-MSAL-2024-03-07-2.log`
pub fn log_file_name(date: NaiveDate, index: u32) -> String {
    format!("{FILE_PREFIX}{}-{index}.log", date.format("%Y-%m-%d"))
}

/// Full candidate path inside `dir`.
pub fn candidate_path(dir: &Path, date: NaiveDate, index: u32) -> PathBuf {
    dir.join(log_file_name(date, index))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn name_pads_month_and_day() {
        assert_eq!(
            log_file_name(day(2024, 3, 7), 1),
            "AzureAD-MSAL-2024-03-07-1.log"
        );
    }

    #[test]
    fn index_is_not_padded() {
        assert_eq!(
            log_file_name(day(2023, 12, 31), 42),
            "AzureAD-MSAL-2023-12-31-42.log"
        );
    }

    #[test]
    fn candidate_lives_in_dir() {
        let p = candidate_path(Path::new("/var/log/aad"), day(2024, 1, 2), 3);
        assert_eq!(p, PathBuf::from("/var/log/aad/AzureAD-MSAL-2024-01-02-3.log"));
    }

    #[test]
    fn default_dir_ends_in_documents() {
        assert!(default_log_dir().ends_with("Documents"));
    }

    #[test]
    fn home_wins_over_user_profile() {
        let dir = log_dir_under(Some("/home/alice".into()), Some("/profiles/alice".into()));
        assert_eq!(dir, PathBuf::from("/home/alice/Documents"));
    }

    #[test]
    fn user_profile_used_without_home() {
        let dir = log_dir_under(None, Some("/profiles/alice".into()));
        assert_eq!(dir, PathBuf::from("/profiles/alice/Documents"));
    }

    #[test]
    fn empty_home_is_skipped() {
        let dir = log_dir_under(Some(PathBuf::new()), Some("/profiles/alice".into()));
        assert_eq!(dir, PathBuf::from("/profiles/alice/Documents"));
    }

    #[test]
    fn no_home_falls_back_to_current_dir() {
        assert_eq!(log_dir_under(None, None), PathBuf::from("./Documents"));
    }
}
