//! CSV reading with encoding fallback.
//!
//! Input is decoded to UTF-8 first (legacy encodings are detected with
//! `chardet`), then parsed as standard comma-separated values into a
//! [`Table`]. The first record is the header; all records must have the
//! same number of fields.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{CsvError, CsvResult, ReportError, ReportResult};
use crate::models::Table;

const UTF8_BOM: char = '\u{feff}';

/// Detect the encoding of raw bytes using chardet
pub fn detect_encoding(bytes: &[u8]) -> String {
    let result = chardet::detect(bytes);
    let charset = result.0;

    // Normalize charset names
    match charset.to_lowercase().as_str() {
        "ascii" | "utf-8" | "utf8" => "utf-8".to_string(),
        "iso-8859-1" | "iso-8859-15" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        _ => charset,
    }
}

/// Decode bytes to a string using the given encoding label.
///
/// Unknown labels fall back to lossy UTF-8.
pub fn decode_content(bytes: &[u8], encoding: &str) -> String {
    match encoding.to_lowercase().as_str() {
        // WHATWG maps the latin-1 label onto windows-1252
        "iso-8859-1" | "latin-1" | "latin1" | "windows-1252" | "cp1252" => {
            encoding_rs::WINDOWS_1252.decode(bytes).0.into_owned()
        }
        _ => String::from_utf8_lossy(bytes).into_owned(),
    }
}

/// Turn file bytes into text: UTF-8 when valid, detected encoding otherwise.
///
/// A leading byte order mark is dropped.
pub fn decode_bytes(bytes: &[u8]) -> String {
    let text = match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => decode_content(bytes, &detect_encoding(bytes)),
    };

    match text.strip_prefix(UTF8_BOM) {
        Some(rest) => rest.to_string(),
        None => text,
    }
}

/// Fail if a quoted field is still open at end of input.
///
/// Follows the reader's quoting rules: a `"` opens a quoted field only
/// at the start of a field, `""` inside quotes is an escaped quote, and
/// quotes elsewhere are literal. The error carries the line where the
/// open field started.
pub fn check_quotes(content: &str) -> CsvResult<()> {
    let mut line: u64 = 1;
    let mut field_start = true;
    let mut open_at: Option<u64> = None;
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\n' {
            line += 1;
        }

        if open_at.is_some() {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    chars.next();
                } else {
                    open_at = None;
                }
            }
            continue;
        }

        match c {
            '"' if field_start => {
                open_at = Some(line);
                field_start = false;
            }
            ',' | '\n' | '\r' => field_start = true,
            _ => field_start = false,
        }
    }

    match open_at {
        Some(start) => Err(CsvError::new(start, "unterminated quoted field")),
        None => Ok(()),
    }
}

/// Parse CSV text into a [`Table`].
///
/// Blank lines are skipped. Fails on an empty document, on a quoted
/// field left open at end of input, or on a record whose field count
/// differs from the header's.
///
/// # Example
/// ```
/// use csv_sorter::parse_csv;
///
/// let table = parse_csv("Name,Tier\nAlice,Gold\n").unwrap();
/// assert_eq!(table.headers, vec!["Name", "Tier"]);
/// assert_eq!(table.rows[0], vec!["Alice", "Gold"]);
/// ```
pub fn parse_csv(content: &str) -> CsvResult<Table> {
    check_quotes(content)?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(false)
        .from_reader(content.as_bytes());

    let mut records = reader.records();

    let headers: Vec<String> = match records.next() {
        Some(record) => record?.iter().map(String::from).collect(),
        None => return Err(CsvError::empty_file()),
    };

    let mut rows = Vec::new();
    for record in records {
        let record = record?;
        rows.push(record.iter().map(String::from).collect());
    }

    Ok(Table { headers, rows })
}

/// Read and parse a CSV file.
///
/// The file handle is closed before this returns, on success or failure.
pub fn parse_csv_file(path: &Path) -> ReportResult<Table> {
    let read_error = |source| ReportError::Read {
        path: path.to_path_buf(),
        source,
    };

    let mut bytes = Vec::new();
    File::open(path)
        .and_then(|mut file| file.read_to_end(&mut bytes))
        .map_err(read_error)?;

    Ok(parse_csv(&decode_bytes(&bytes))?)
}
