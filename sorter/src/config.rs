//! Runtime configuration.
//!
//! Column names and the output format are fixed. The only tunable is the
//! directory scanned for CSV files, taken from the environment (a `.env`
//! file is loaded by the CLI before this is read).

use std::path::PathBuf;

/// Environment variable naming the default directory for `list`.
pub const DIR_ENV: &str = "CSV_SORTER_DIR";

/// File extension offered when looking for input files.
pub const CSV_EXTENSION: &str = "csv";

/// Directory to look for CSV files in when none is given.
///
/// `CSV_SORTER_DIR` if set and non-empty, else the current directory.
pub fn default_search_dir() -> std::io::Result<PathBuf> {
    match std::env::var_os(DIR_ENV) {
        Some(dir) if !dir.is_empty() => Ok(PathBuf::from(dir)),
        _ => std::env::current_dir(),
    }
}
