//! High-level pipeline API: CSV file in, tier report file out.
//!
//! ```text
//! read → filter → stable sort → group/format → write
//! ```
//!
//! The report is fully built in memory before anything is written, so a
//! failure at any stage leaves the filesystem untouched.
//!
//! # Example
//!
//! ```rust,no_run
//! use csv_sorter::generate;
//! use std::path::Path;
//!
//! let output = generate(Path::new("patrons.csv"))?;
//! println!("'Name' column exported as {}.", output.display());
//! # Ok::<(), csv_sorter::ReportError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use super::filter::active_patrons;
use super::grouper::{format_report, group_by_tier, sort_by_tier};
use crate::error::{ReportError, ReportResult};
use crate::logs::{log_error, log_info, log_success, log_warning};
use crate::models::{Report, Table};
use crate::parser::parse_csv_file;

/// Suffix replacing the input's extension in the output file name.
pub const OUTPUT_SUFFIX: &str = "_sort.txt";

/// Options for the report pipeline
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportOptions {
    /// Write here instead of the path derived from the input
    pub output_path: Option<PathBuf>,

    /// Build the report but do not write it
    pub dry_run: bool,
}

/// Result of [`generate_with`]
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResult {
    /// Where the report was (or, on a dry run, would have been) written
    pub output_path: PathBuf,

    /// The report contents and grouping
    pub report: Report,

    /// False on a dry run
    pub written: bool,
}

/// Build the report for an already-parsed table.
///
/// Fails only if a required column is missing.
pub fn build_report(table: &Table) -> ReportResult<Report> {
    let columns = table.resolve_columns()?;

    let mut rows = active_patrons(table, &columns);
    sort_by_tier(&mut rows);
    let groups = group_by_tier(&rows);
    let text = format_report(&groups);

    Ok(Report {
        text,
        total_rows: table.row_count(),
        retained_rows: rows.len(),
        groups,
    })
}

/// Read a CSV file and build its report without writing anything.
pub fn render_report(input: &Path) -> ReportResult<Report> {
    read_and_build(input).map_err(|e| {
        log_error(e.to_string());
        e
    })
}

fn read_and_build(input: &Path) -> ReportResult<Report> {
    log_info(format!("📖 Reading CSV file: {}", input.display()));
    let table = parse_csv_file(input)?;
    log_success(format!(
        "Read {} rows, {} columns",
        table.row_count(),
        table.headers.len()
    ));

    let report = build_report(&table)?;

    if report.retained_rows == 0 {
        log_warning("No active patrons found, report will be empty");
    } else {
        log_success(format!(
            "{} active patrons in {} tier(s)",
            report.retained_rows,
            report.groups.len()
        ));
    }

    Ok(report)
}

/// Output path for an input file: same directory, final extension
/// replaced by `_sort.txt`.
///
/// `patrons.csv` → `patrons_sort.txt`, `export.2024.csv` → `export.2024_sort.txt`.
/// Everything from the last `.` of the file name is the extension, so a
/// dotfile such as `.csv` keeps no stem and becomes `_sort.txt`.
pub fn derive_output_path(input: &Path) -> PathBuf {
    let file_name = input.file_name().unwrap_or_default().to_string_lossy();
    let stem = match file_name.rfind('.') {
        Some(dot) => &file_name[..dot],
        None => &file_name[..],
    };
    input.with_file_name(format!("{}{}", stem, OUTPUT_SUFFIX))
}

/// Write report text, creating or truncating the file.
pub fn write_report(path: &Path, text: &str) -> ReportResult<()> {
    let write_error = |source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }

    let mut file = options.open(path).map_err(write_error)?;
    file.write_all(text.as_bytes()).map_err(write_error)?;
    file.flush().map_err(write_error)
}

/// Run the full pipeline with default options.
///
/// Returns the path of the written report.
pub fn generate(input: &Path) -> ReportResult<PathBuf> {
    generate_with(input, &ReportOptions::default()).map(|result| result.output_path)
}

/// Run the full pipeline.
pub fn generate_with(input: &Path, options: &ReportOptions) -> ReportResult<GenerateResult> {
    let report = render_report(input)?;

    let output_path = options
        .output_path
        .clone()
        .unwrap_or_else(|| derive_output_path(input));

    if options.dry_run {
        log_info(format!("(dry run) would write {}", output_path.display()));
        return Ok(GenerateResult {
            output_path,
            report,
            written: false,
        });
    }

    if let Err(e) = write_report(&output_path, &report.text) {
        log_error(e.to_string());
        return Err(e);
    }
    log_success(format!("💾 Output written to: {}", output_path.display()));

    Ok(GenerateResult {
        output_path,
        report,
        written: true,
    })
}
