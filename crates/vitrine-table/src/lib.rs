//! vitrine-table - Tabular source data for the vitrine pipelines
//!
//! Source tables arrive from the loading layer as row mappings (column
//! name to raw string cell). This crate provides:
//!
//! - **Table / Row**: the in-memory row-mapping model
//! - **resolve_column**: heuristic column lookup by substring keyword,
//!   isolated as a pure function instead of per-table header sniffing
//! - **parse_number / parse_percent**: cell coercion with a defined
//!   grammar, returning `None` rather than NaN sentinels
//! - **parse_csv_text**: parsing for exports that arrive as raw text
//!   with a possible leading metadata line
//!
//! Everything here is lookup and coercion; no table is ever mutated by
//! the pipelines that consume it.

pub mod csv_text;
pub mod parse;
pub mod table;

pub use csv_text::*;
pub use parse::*;
pub use table::*;

// Setup UniFFI when the feature is enabled
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();
