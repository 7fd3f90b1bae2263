//! Status filter.

use crate::models::{ColumnIndex, PatronRow, Table};

/// Rows whose "Patron Status" is "Active Patron", in input order.
///
/// Status is compared after trimming surrounding whitespace and
/// ignoring case. Rows are borrowed from the table, not copied.
pub fn active_patrons<'a>(table: &'a Table, columns: &ColumnIndex) -> Vec<PatronRow<'a>> {
    table
        .rows
        .iter()
        .filter_map(|row| columns.project(row))
        .filter(|row| row.is_active())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_csv;

    #[test]
    fn test_only_active_rows_kept() {
        let table = parse_csv(
            "Name,Tier,Patron Status\n\
             Alice,Gold,Active Patron\n\
             Bob,Silver, active patron \n\
             Carl,Gold,Lapsed\n\
             Dana,Bronze,Declined Patron\n\
             Eve,Gold,ACTIVE PATRON\n",
        )
        .unwrap();
        let columns = table.resolve_columns().unwrap();

        let kept = active_patrons(&table, &columns);
        let names: Vec<&str> = kept.iter().map(|r| r.name).collect();

        assert_eq!(names, vec!["Alice", "Bob", "Eve"]);
        assert!(kept.iter().all(|r| r.is_active()));
    }

    #[test]
    fn test_no_matches_is_empty() {
        let table = parse_csv("Name,Tier,Patron Status\nCarl,Gold,Former Patron\n").unwrap();
        let columns = table.resolve_columns().unwrap();

        assert!(active_patrons(&table, &columns).is_empty());
    }
}
