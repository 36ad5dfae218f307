//! Parsing for tables that arrive as raw CSV text
//!
//! The search-interest export is not a clean CSV file: it may open with
//! a metadata line (`Category: ...`) before the real header, and blank
//! lines appear between sections. This module cleans the text and parses
//! what remains into a [`Table`].

use thiserror::Error;

use crate::table::{Row, Table};

/// Prefix of the non-tabular metadata line some exports prepend
pub const METADATA_SENTINEL: &str = "Category:";

/// Errors from CSV text parsing
#[derive(Debug, Error)]
pub enum TableError {
    #[error("table text contains no rows")]
    Empty,

    #[error("CSV parsing error: {0}")]
    Csv(String),
}

/// Result type for table parsing
pub type TableResult<T> = Result<T, TableError>;

/// Drop blank lines and a leading metadata line, keeping the rest
///
/// Lines are kept in order; only fully blank lines are removed. If the
/// first surviving line starts with [`METADATA_SENTINEL`] it is dropped
/// as well, leaving the header as the first line.
pub fn strip_metadata(text: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
    if lines.first().is_some_and(|l| l.starts_with(METADATA_SENTINEL)) {
        lines.remove(0);
    }
    lines
}

/// Parse raw CSV text into a [`Table`]
///
/// The text is cleaned with [`strip_metadata`] first. The first
/// surviving line is the header; rows with more cells than the header
/// lose the extras, shorter rows leave trailing cells absent.
pub fn parse_csv_text(text: &str) -> TableResult<Table> {
    let lines = strip_metadata(text);
    if lines.is_empty() {
        return Err(TableError::Empty);
    }
    let body = lines.join("\n");

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(body.as_bytes());

    let columns: Vec<String> = reader
        .headers()
        .map_err(|e| TableError::Csv(e.to_string()))?
        .iter()
        .map(|s| s.to_string())
        .collect();

    let mut table = Table::new(columns.clone());
    for result in reader.records() {
        let record = result.map_err(|e| TableError::Csv(e.to_string()))?;
        let row: Row = columns
            .iter()
            .zip(record.iter())
            .map(|(c, v)| (c.clone(), v.to_string()))
            .collect();
        table.push(row);
    }

    Ok(table)
}
