//! Find CSV files to feed the pipeline.
//!
//! Lists the `.csv` files of a single directory, non-recursively, sorted
//! by file name.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::CSV_EXTENSION;

/// Whether `path` has a `.csv` extension, ignoring case.
pub fn is_csv_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(CSV_EXTENSION))
}

/// CSV files directly inside `dir`.
///
/// Subdirectories are ignored, even when their name ends in `.csv`.
pub fn list_csv_files(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && is_csv_file(path))
        .collect();

    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_csv_file() {
        assert!(is_csv_file(Path::new("patrons.csv")));
        assert!(is_csv_file(Path::new("/tmp/PATRONS.CSV")));
        assert!(!is_csv_file(Path::new("patrons_sort.txt")));
        assert!(!is_csv_file(Path::new("csv")));
    }

    #[test]
    fn test_list_csv_files() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.csv", "a.CSV", "notes.txt", "a_sort.txt"] {
            fs::write(dir.path().join(name), "").unwrap();
        }
        fs::create_dir(dir.path().join("nested.csv")).unwrap();

        let files = list_csv_files(dir.path()).unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();

        assert_eq!(names, vec!["a.CSV", "b.csv"]);
    }

    #[test]
    fn test_list_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert!(list_csv_files(&dir.path().join("gone")).is_err());
    }
}
