//! Threshold row filtering.

use std::num::IntErrorKind;

use crate::error::{ParserError, ParserResult};
use crate::types::{FilterSpec, Row};

/// Returns the rows that satisfy every filter in `specs`, in their original order.
///
/// For each spec the row's value for `spec.column` is parsed as an integer (surrounding
/// whitespace is ignored). Integers of any magnitude are accepted. A row without that column
/// compares as `0`. Specs are evaluated in
/// order and evaluation stops at the first one a row fails.
///
/// Fails with [`ParserError::ParseError`] if a compared value is not an integer; no partial
/// result is returned. An empty `specs` list returns an unchanged copy of `rows`.
pub fn filter_rows(rows: &[Row], specs: &[FilterSpec]) -> ParserResult<Vec<Row>> {
    let mut out = Vec::with_capacity(rows.len());
    for (idx0, row) in rows.iter().enumerate() {
        if row_matches(idx0 + 1, row, specs)? {
            out.push(row.clone());
        }
    }
    Ok(out)
}

/// Whether `row` satisfies all of `specs`. `row_number` is only used for error reporting.
pub fn row_matches(row_number: usize, row: &Row, specs: &[FilterSpec]) -> ParserResult<bool> {
    for spec in specs {
        let value = compared_value(row_number, row, &spec.column)?;
        if !spec.direction.compare(value, spec.threshold) {
            return Ok(false);
        }
    }
    Ok(true)
}

// Integers beyond the i128 range clamp to its bounds; they lie past every i64 threshold, so
// the comparison outcome is unchanged.
fn compared_value(row_number: usize, row: &Row, column: &str) -> ParserResult<i128> {
    let Some(raw) = row.get(column) else {
        return Ok(0);
    };

    match raw.trim().parse::<i128>() {
        Ok(v) => Ok(v),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Ok(i128::MAX),
            IntErrorKind::NegOverflow => Ok(i128::MIN),
            _ => Err(ParserError::ParseError {
                row: row_number,
                column: column.to_owned(),
                raw: raw.to_owned(),
                message: e.to_string(),
            }),
        },
    }
}
