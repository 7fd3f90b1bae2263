//! Error types for the tier report pipeline.
//!
//! - [`CsvError`] - malformed or empty CSV input, with line context
//! - [`ReportError`] - top-level error returned by [`crate::generate`]
//!
//! `CsvError` converts into `ReportError` via `From`, so `?` works
//! across the parser/pipeline boundary.

use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// CSV Parsing Errors
// =============================================================================

/// CSV parsing error with line context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvError {
    /// 1-based line number, 0 when the error is not tied to a line.
    pub line: u64,
    pub message: String,
}

impl std::fmt::Display for CsvError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.line == 0 {
            write!(f, "{}", self.message)
        } else {
            write!(f, "Line {}: {}", self.line, self.message)
        }
    }
}

impl std::error::Error for CsvError {}

impl CsvError {
    pub fn new(line: u64, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }

    /// The input contained no rows at all, not even a header.
    pub fn empty_file() -> Self {
        Self::new(0, "empty file")
    }
}

impl From<csv::Error> for CsvError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(|p| p.line()).unwrap_or(0);
        let message = match err.kind() {
            csv::ErrorKind::UnequalLengths { expected_len, len, .. } => {
                format!("found record with {} fields, but the header has {}", len, expected_len)
            }
            csv::ErrorKind::Utf8 { err, .. } => format!("invalid UTF-8: {}", err),
            _ => err.to_string(),
        };
        Self::new(line, message)
    }
}

// =============================================================================
// Report Errors (top-level)
// =============================================================================

/// Top-level pipeline error.
///
/// Every variant is terminal for the current run; nothing is written to
/// disk once one of these has been produced.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Input file could not be opened or read.
    #[error("Failed to open the file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input is not well-formed CSV, or is empty.
    #[error("Failed to read the CSV file: {0}")]
    Parse(#[from] CsvError),

    /// A required header is absent.
    #[error("Column not found: '{0}'")]
    ColumnNotFound(String),

    /// Output file could not be written.
    #[error("Failed to write to the file '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ReportError {
    /// Short label of the pipeline stage that failed.
    pub fn stage(&self) -> &'static str {
        match self {
            Self::Read { .. } => "read",
            Self::Parse(_) => "parse",
            Self::ColumnNotFound(_) => "column",
            Self::Write { .. } => "write",
        }
    }
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for CSV operations.
pub type CsvResult<T> = Result<T, CsvError>;

/// Result type for report operations.
pub type ReportResult<T> = Result<T, ReportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion_chain() {
        let csv_err = CsvError::empty_file();
        let report_err: ReportError = csv_err.into();
        assert_eq!(report_err.stage(), "parse");
        assert!(report_err.to_string().contains("empty file"));
    }

    #[test]
    fn test_column_not_found_names_column() {
        let err = ReportError::ColumnNotFound("Patron Status".into());
        assert_eq!(err.stage(), "column");
        assert!(err.to_string().contains("Patron Status"));
    }

    #[test]
    fn test_read_error_mentions_path() {
        let err = ReportError::Read {
            path: PathBuf::from("/tmp/patrons.csv"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        let msg = err.to_string();
        assert!(msg.contains("patrons.csv"));
        assert!(msg.contains("missing"));
        assert_eq!(err.stage(), "read");
    }

    #[test]
    fn test_error_message_format() {
        let err = CsvError::new(5, "found record with 2 fields, but the header has 3");
        assert_eq!(
            err.to_string(),
            "Line 5: found record with 2 fields, but the header has 3"
        );
    }

    #[test]
    fn test_lineless_error_has_no_prefix() {
        assert_eq!(CsvError::empty_file().to_string(), "empty file");
    }
}
