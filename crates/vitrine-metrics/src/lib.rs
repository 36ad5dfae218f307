//! vitrine-metrics - Chart data pipelines for the brand dashboard
//!
//! Each pipeline is a pure function from source tables to a
//! visualization-ready structure; the rendering layer consumes the
//! output and never reaches back into raw rows. Recomputing on a
//! resize or metric toggle is idempotent, so callers simply discard a
//! superseded result.
//!
//! # Pipelines
//!
//! - **aggregate**: joins four tables on the brand key into raw and
//!   min-max normalized metric profiles (radar chart)
//! - **density**: per-brand resale price samples with cross-metric
//!   imputation, smoothed into aligned density curves (distribution
//!   comparison chart)
//! - **series**: revenue table reshaping - per-brand year series,
//!   latest-year totals, long-format points (line, bar, bubble charts)
//! - **breakdown**: brand-by-category price matrix with cumulative
//!   stack segments (stacked bar chart)

pub mod aggregate;
pub mod breakdown;
pub mod density;
pub mod series;

pub use aggregate::*;
pub use breakdown::*;
pub use density::*;
pub use series::*;

// Setup UniFFI when the feature is enabled
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();
