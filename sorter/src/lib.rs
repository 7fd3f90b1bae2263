//! # CSV Sorter - active patrons grouped by tier
//!
//! Reads a patron export (CSV), keeps the rows whose "Patron Status" is
//! "Active Patron", and writes their names grouped by "Tier" to a text
//! file next to the input.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   CSV File  │────▶│   Parser    │────▶│  Transform  │────▶│ *_sort.txt  │
//! │  (UTF8/ISO) │     │  (Table)    │     │(filter+sort)│     │  (grouped)  │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use csv_sorter::generate;
//! use std::path::Path;
//!
//! match generate(Path::new("patrons.csv")) {
//!     Ok(path) => println!("'Name' column exported as {}.", path.display()),
//!     Err(e) => eprintln!("{} failed: {}", e.stage(), e),
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types
//! - [`models`] - Table, column index, report
//! - [`parser`] - CSV decoding and parsing
//! - [`transform`] - Filter, grouping, and pipeline
//! - [`discovery`] - Finding CSV files in a directory
//! - [`config`] - Environment configuration
//! - [`logs`] - Progress log channel

// Core modules
pub mod error;
pub mod models;

// Parsing
pub mod parser;

// Transformation
pub mod transform;

// Input discovery
pub mod config;
pub mod discovery;

// Progress reporting
pub mod logs;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{CsvError, CsvResult, ReportError, ReportResult};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{
    ColumnIndex,
    PatronRow,
    Report,
    Table,
    TierGroup,
    ACTIVE_STATUS,
    NAME_COLUMN,
    SEPARATOR,
    STATUS_COLUMN,
    TIER_COLUMN,
};

// =============================================================================
// Re-exports - CSV Parsing
// =============================================================================

pub use parser::{
    check_quotes,
    decode_bytes,
    decode_content,
    detect_encoding,
    parse_csv,
    parse_csv_file,
};

// =============================================================================
// Re-exports - Pipeline
// =============================================================================

pub use transform::{
    active_patrons,
    build_report,
    derive_output_path,
    format_report,
    generate,
    generate_with,
    group_by_tier,
    render_report,
    sort_by_tier,
    write_report,
    GenerateResult,
    ReportOptions,
    OUTPUT_SUFFIX,
};

// =============================================================================
// Re-exports - Discovery
// =============================================================================

pub use discovery::{is_csv_file, list_csv_files};
