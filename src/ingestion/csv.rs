//! CSV reader: file -> ordered [`Row`] sequence.

use std::collections::HashMap;
use std::path::Path;

use crate::error::{ParserError, ParserResult};
use crate::types::Row;

/// Read a CSV file into an ordered row sequence.
///
/// Rules:
///
/// - The first line is the header; every row is keyed by its column names.
/// - Values stay raw strings (no trimming, no type coercion).
/// - A header-only file yields an empty sequence.
/// - Rows shorter than the header omit the missing columns; extra trailing cells are ignored.
///
/// The file is fully consumed and closed before this returns.
pub fn read_csv_from_path(path: impl AsRef<Path>) -> ParserResult<Vec<Row>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ParserError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let mut rdr = reader_builder().from_path(path)?;
    read_csv_from_reader(&mut rdr)
}

/// Read CSV rows from an existing CSV reader.
///
/// The reader should be configured with headers enabled; see [`reader_builder`].
pub fn read_csv_from_reader<R: std::io::Read>(rdr: &mut csv::Reader<R>) -> ParserResult<Vec<Row>> {
    let headers = rdr.headers()?.clone();
    let (columns, slots) = header_slots(&headers);

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let mut values: Vec<Option<&str>> = vec![None; columns.len()];
        for (cell, &slot) in record.iter().zip(&slots) {
            values[slot] = Some(cell);
        }
        let fields = columns
            .iter()
            .zip(values)
            .filter_map(|(column, value)| value.map(|v| (column.clone(), v.to_owned())))
            .collect();
        rows.push(Row::from_unique(fields));
    }

    Ok(rows)
}

/// Unique column names in first-seen order, plus the column slot of each header position.
/// A repeated header shares the slot of its first occurrence, so its later cell wins.
fn header_slots(headers: &csv::StringRecord) -> (Vec<String>, Vec<usize>) {
    let mut columns: Vec<String> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut slots = Vec::with_capacity(headers.len());
    for name in headers.iter() {
        let slot = *index.entry(name).or_insert_with(|| {
            columns.push(name.to_owned());
            columns.len() - 1
        });
        slots.push(slot);
    }
    (columns, slots)
}

/// CSV reader settings used by [`read_csv_from_path`]: comma-delimited, header-first, flexible
/// record lengths.
pub fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.has_headers(true).delimiter(b',').flexible(true);
    builder
}
