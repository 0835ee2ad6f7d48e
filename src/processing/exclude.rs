//! Column exclusion.

use std::collections::HashSet;

use crate::types::Row;

/// Returns new rows with every column in `columns` removed.
///
/// Row count and order are preserved. Columns that a row does not have are ignored, and an
/// empty `columns` list returns an unchanged copy of `rows`.
pub fn exclude_columns<S: AsRef<str>>(rows: &[Row], columns: &[S]) -> Vec<Row> {
    if columns.is_empty() {
        return rows.to_vec();
    }

    let excluded: HashSet<&str> = columns.iter().map(|c| c.as_ref()).collect();
    rows.iter()
        .map(|row| row.without(|column| excluded.contains(column)))
        .collect()
}
