//! Row-mapping table model
//!
//! A [`Table`] is a header plus a list of rows, each row an untyped
//! mapping from column name to raw cell string. This mirrors what the
//! CSV loading layer hands over: no types, no trimming, cells exactly as
//! they appeared in the source.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::parse::parse_number;

/// One row of a source table: column name to raw cell value
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Row {
    cells: HashMap<String, String>,
}

impl Row {
    /// Create an empty row
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a cell value
    pub fn set(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.cells.insert(column.into(), value.into());
    }

    /// Get a raw cell value
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells.get(column).map(|s| s.as_str())
    }

    /// Get a cell value from the first of several candidate columns
    ///
    /// Used for tables that are inconsistent about header casing
    /// (`brand` vs `Brand`).
    pub fn get_any<'a>(&'a self, columns: &[&str]) -> Option<&'a str> {
        columns.iter().find_map(|c| self.get(c))
    }

    /// Coerce a cell to a finite number, if possible
    pub fn number(&self, column: &str) -> Option<f64> {
        self.get(column).and_then(parse_number)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = Row::new();
        for (k, v) in iter {
            row.set(k, v);
        }
        row
    }
}

/// An in-memory source table: ordered columns plus rows
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl Table {
    /// Create an empty table with the given header
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Build a table from a header and positional records
    ///
    /// Records shorter than the header leave the trailing cells absent;
    /// extra cells beyond the header are dropped.
    pub fn from_records(columns: Vec<String>, records: Vec<Vec<String>>) -> Self {
        let rows = records
            .into_iter()
            .map(|record| {
                columns
                    .iter()
                    .zip(record)
                    .map(|(c, v)| (c.clone(), v))
                    .collect()
            })
            .collect();
        Self { columns, rows }
    }

    /// Append a row
    pub fn push(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// Column names, in source order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// All rows, in source order
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Resolve a column by substring keywords, see [`resolve_column`]
    pub fn resolve_column(&self, keywords: &[&str]) -> Option<&str> {
        resolve_column(&self.columns, keywords)
    }
}

/// Resolve a column name by case-insensitive substring match
///
/// Keywords are tried in priority order; within one keyword, columns are
/// scanned in header order and the first containing the keyword wins.
/// Returns `None` when no keyword matches any column.
pub fn resolve_column<'a>(columns: &'a [String], keywords: &[&str]) -> Option<&'a str> {
    let lowered: Vec<String> = columns.iter().map(|c| c.to_lowercase()).collect();
    for keyword in keywords {
        let keyword = keyword.to_lowercase();
        if let Some(idx) = lowered.iter().position(|c| c.contains(&keyword)) {
            return Some(columns[idx].as_str());
        }
    }
    None
}
