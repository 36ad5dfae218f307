//! vitrine-stats - Statistical primitives for brand analytics
//!
//! This crate provides the numeric building blocks the pipelines share:
//!
//! - **KDE**: Epanechnikov kernel density estimation over a shared
//!   evaluation grid, with range-derived bandwidth selection
//! - **SampleSummary**: count/min/max/mean in one pass
//!
//! # Design Philosophy
//!
//! Smoothed densities are preferred over histograms for the distribution
//! comparison because they:
//! - Overlay cleanly for several brands at once
//! - Avoid bin edge artifacts when sample counts differ wildly
//! - Stay comparable when every curve is evaluated on the same grid
//!
//! Everything is a pure function of its inputs; evaluating twice on the
//! same data is bit-identical.

pub mod kde;
pub mod summary;

pub use kde::*;
pub use summary::*;

// Setup UniFFI when the feature is enabled
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();
