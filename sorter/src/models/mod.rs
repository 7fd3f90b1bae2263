//! Domain models for the tier report.
//!
//! - [`Table`]: header row plus data rows, as read from the CSV file
//! - [`ColumnIndex`]: resolved positions of the three required columns
//! - [`PatronRow`]: the cells of one data row the report cares about
//! - [`TierGroup`] / [`Report`]: the grouped output

use serde::{Deserialize, Serialize};

use crate::error::ReportError;

/// Header of the column holding the patron tier.
pub const TIER_COLUMN: &str = "Tier";

/// Header of the column holding the patron status.
pub const STATUS_COLUMN: &str = "Patron Status";

/// Header of the column holding the patron name.
pub const NAME_COLUMN: &str = "Name";

/// Status value (compared trimmed, ignoring case) of rows kept in the report.
pub const ACTIVE_STATUS: &str = "Active Patron";

/// Line written before the first name of each tier group.
pub const SEPARATOR: &str = "---------------------------";

// =============================================================================
// Table
// =============================================================================

/// A parsed CSV document.
///
/// Every row in `rows` has exactly `headers.len()` cells; the parser
/// rejects ragged input before a `Table` is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Position of `name` in the header row, matched exactly.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Resolve the report columns, failing on the first one that is missing.
    pub fn resolve_columns(&self) -> Result<ColumnIndex, ReportError> {
        let find = |name: &str| {
            self.position(name)
                .ok_or_else(|| ReportError::ColumnNotFound(name.to_string()))
        };

        Ok(ColumnIndex {
            tier: find(TIER_COLUMN)?,
            status: find(STATUS_COLUMN)?,
            name: find(NAME_COLUMN)?,
        })
    }

    /// Number of data rows (header excluded).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

// =============================================================================
// Columns
// =============================================================================

/// Zero-based positions of the required columns in a [`Table`].
///
/// Only obtainable through [`Table::resolve_columns`], so every index
/// is known to be inside the header.
///
/// ```compile_fail
/// let columns = csv_sorter::ColumnIndex { tier: 0, status: 1, name: 2 };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnIndex {
    tier: usize,
    status: usize,
    name: usize,
}

impl ColumnIndex {
    pub fn tier(&self) -> usize {
        self.tier
    }

    pub fn status(&self) -> usize {
        self.status
    }

    pub fn name(&self) -> usize {
        self.name
    }

    /// Borrow the report cells out of a data row.
    ///
    /// Returns `None` if the row is shorter than the header, which the
    /// parser never produces.
    pub fn project<'a>(&self, row: &'a [String]) -> Option<PatronRow<'a>> {
        Some(PatronRow {
            tier: row.get(self.tier)?,
            status: row.get(self.status)?,
            name: row.get(self.name)?,
        })
    }
}

/// View of a single data row through a [`ColumnIndex`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatronRow<'a> {
    pub tier: &'a str,
    pub status: &'a str,
    pub name: &'a str,
}

impl PatronRow<'_> {
    /// Whether the status is "Active Patron", ignoring case and surrounding whitespace.
    pub fn is_active(&self) -> bool {
        self.status.trim().eq_ignore_ascii_case(ACTIVE_STATUS)
    }
}

// =============================================================================
// Report
// =============================================================================

/// Names of one tier, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierGroup {
    pub tier: String,
    pub names: Vec<String>,
}

/// The formatted report together with its grouping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Text written to the output file.
    pub text: String,
    /// Tier groups in output order.
    pub groups: Vec<TierGroup>,
    /// Data rows read from the input (header excluded).
    pub total_rows: usize,
    /// Rows kept by the status filter.
    pub retained_rows: usize,
}
