//! Density comparison pipeline
//!
//! Groups resale observations into per-brand samples for the two price
//! metrics, patches partial coverage by cross-metric imputation, then
//! smooths every brand onto one shared evaluation grid so the resulting
//! curves overlay without resampling.
//!
//! Recomputed whenever the active metric toggles or the viewport
//! changes; both steps are pure, so a superseded result is simply
//! dropped by the caller.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use vitrine_domain::{Brand, PriceMetric};
use vitrine_stats::{
    evaluation_grid, select_bandwidth, DensityPoint, KernelDensity, SampleSummary,
    DEFAULT_GRID_SIZE,
};
use vitrine_table::Table;

/// Substring locating the brand column in the resale table
const BRAND_KEYWORD: &str = "brand";

/// Errors from the density pipeline
#[derive(Debug, Error)]
pub enum DensityError {
    /// Every brand's sample set for the metric is empty, even after
    /// imputation; callers must render an explicit empty state.
    #[error("no samples available for metric {metric}")]
    NoSamples { metric: PriceMetric },
}

/// Result type for the density pipeline
pub type DensityResult<T> = Result<T, DensityError>;

/// Tuning knobs for the density comparison
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DensityConfig {
    /// Number of shared grid positions
    pub grid_size: usize,
    /// Bandwidth override (None = range-derived selection)
    pub bandwidth: Option<f64>,
}

impl Default for DensityConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            bandwidth: None,
        }
    }
}

/// Per-brand, per-metric numeric samples from the resale table
///
/// Construction resolves the brand column and both value columns by
/// keyword, groups parsable cells under their brand, then applies
/// cross-metric imputation: a brand empty in one metric borrows a copy
/// of its other metric's samples. Both metric selections are thereby
/// renderable whenever either has coverage.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PriceSamples {
    samples: HashMap<Brand, HashMap<PriceMetric, Vec<f64>>>,
}

impl PriceSamples {
    /// Group and impute samples from the resale table
    pub fn from_table(table: &Table) -> Self {
        let mut samples: HashMap<Brand, HashMap<PriceMetric, Vec<f64>>> = Brand::ALL
            .into_iter()
            .map(|brand| {
                (
                    brand,
                    PriceMetric::ALL.into_iter().map(|m| (m, Vec::new())).collect(),
                )
            })
            .collect();

        let brand_column = table.resolve_column(&[BRAND_KEYWORD]);
        let value_columns: Vec<(PriceMetric, Option<&str>)> = PriceMetric::ALL
            .into_iter()
            .map(|metric| (metric, table.resolve_column(metric.column_keywords())))
            .collect();

        if let Some(brand_column) = brand_column {
            for row in table.rows() {
                let Some(brand) = row.get(brand_column).and_then(Brand::from_raw) else {
                    continue;
                };
                for &(metric, column) in &value_columns {
                    let Some(value) = column.and_then(|c| row.number(c)) else {
                        continue;
                    };
                    if let Some(group) = samples.get_mut(&brand).and_then(|m| m.get_mut(&metric)) {
                        group.push(value);
                    }
                }
            }
        }

        let mut grouped = Self { samples };
        grouped.impute();
        grouped
    }

    /// Copy the non-empty metric over the empty one, per brand
    fn impute(&mut self) {
        for groups in self.samples.values_mut() {
            for metric in PriceMetric::ALL {
                let donor = groups.get(&metric.other()).cloned().unwrap_or_default();
                let target = groups.entry(metric).or_default();
                if target.is_empty() && !donor.is_empty() {
                    *target = donor;
                }
            }
        }
    }

    /// A brand's samples for one metric (post-imputation)
    pub fn samples(&self, brand: Brand, metric: PriceMetric) -> &[f64] {
        self.samples
            .get(&brand)
            .and_then(|m| m.get(&metric))
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// All brands' samples for one metric, concatenated
    ///
    /// This union defines the shared grid extent for the metric.
    pub fn union(&self, metric: PriceMetric) -> Vec<f64> {
        Brand::ALL
            .into_iter()
            .flat_map(|brand| self.samples(brand, metric).iter().copied())
            .collect()
    }

    /// Check whether the metric is empty for every brand
    pub fn is_metric_empty(&self, metric: PriceMetric) -> bool {
        Brand::ALL
            .into_iter()
            .all(|brand| self.samples(brand, metric).is_empty())
    }
}

/// One brand's density curve on the shared grid
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandCurve {
    pub brand: Brand,
    pub points: Vec<DensityPoint>,
}

/// Aligned density curves for every brand under one metric
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DensityComparison {
    /// The metric the curves describe
    pub metric: PriceMetric,
    /// Bandwidth used by the kernel
    pub bandwidth: f64,
    /// One curve per brand in [`Brand::ALL`] order, identical x grids
    pub curves: Vec<BrandCurve>,
}

impl DensityComparison {
    /// Smooth every brand's samples for `metric` onto a shared grid
    ///
    /// The grid spans the union of all brands' samples; a brand that is
    /// still empty after imputation gets an all-zero curve on the same
    /// grid. Fails only when the whole metric is empty.
    pub fn compute(
        samples: &PriceSamples,
        metric: PriceMetric,
        config: &DensityConfig,
    ) -> DensityResult<Self> {
        let union = samples.union(metric);
        let summary =
            SampleSummary::from_data(&union).ok_or(DensityError::NoSamples { metric })?;

        let bandwidth = config
            .bandwidth
            .filter(|h| h.is_finite() && *h > 0.0)
            .unwrap_or_else(|| select_bandwidth(summary.min, summary.max));
        let grid = evaluation_grid(summary.min, summary.max, config.grid_size);
        let kde = KernelDensity::new(bandwidth);

        let curves = Brand::ALL
            .into_iter()
            .map(|brand| BrandCurve {
                brand,
                points: kde.estimate(samples.samples(brand, metric), &grid),
            })
            .collect();

        Ok(Self {
            metric,
            bandwidth,
            curves,
        })
    }

    /// The shared x positions
    pub fn grid(&self) -> Vec<f64> {
        self.curves
            .first()
            .map(|c| c.points.iter().map(|p| p.x).collect())
            .unwrap_or_default()
    }

    /// Largest density across all curves (the y-axis extent)
    pub fn max_density(&self) -> f64 {
        self.curves
            .iter()
            .flat_map(|c| c.points.iter().map(|p| p.density))
            .fold(0.0_f64, f64::max)
    }
}
