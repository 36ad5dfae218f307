//! Brand analytics domain types shared across the vitrine pipelines
//!
//! This crate provides the canonical vocabulary for the luxury-brand
//! dashboard core:
//! - Brand: the fixed, enumerated brand set and the case-insensitive
//!   join key used across every source table
//! - BrandMetric: the four radar-profile metrics
//! - PriceMetric: the two interchangeable resale-price metrics
//!
//! The brand list lives here and only here; both the metric aggregation
//! and the density estimation pipelines consume it rather than keeping
//! their own copies.

pub mod brand;
pub mod metric;

pub use brand::*;
pub use metric::*;

// Setup UniFFI when the feature is enabled
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();
