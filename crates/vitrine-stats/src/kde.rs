//! Kernel density estimation
//!
//! Smooths a sample into a density curve with an Epanechnikov kernel.
//! Curves for several samples are meant to overlay, so callers build one
//! [`evaluation_grid`] from the union of all samples and evaluate every
//! sample on it; the shared x positions are what make overlapping
//! regions comparable.

use serde::{Deserialize, Serialize};

/// Number of grid points used when callers have no reason to deviate
pub const DEFAULT_GRID_SIZE: usize = 80;

/// One evaluated point of a density curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct DensityPoint {
    /// Grid position
    pub x: f64,
    /// Estimated density at `x`
    pub density: f64,
}

/// Select a bandwidth for a sample spanning `[min, max]`
///
/// Primary choice is `range / 24`. When that degenerates (all values
/// identical, or a non-finite extent), fall back to `max * 0.05`, and
/// finally to 1 so the kernel always has positive width.
pub fn select_bandwidth(min: f64, max: f64) -> f64 {
    let primary = (max - min) / 24.0;
    if primary.is_finite() && primary > 0.0 {
        return primary;
    }
    let fallback = max * 0.05;
    if fallback.is_finite() && fallback > 0.0 {
        fallback
    } else {
        1.0
    }
}

/// Build the shared evaluation grid for samples spanning `[min, max]`
///
/// The grid covers `[max(0, min * 0.9), max * 1.05]` with `size` evenly
/// spaced points, endpoints included. The lower bound is clamped to zero
/// because every metric the dashboard plots is a price.
pub fn evaluation_grid(min: f64, max: f64, size: usize) -> Vec<f64> {
    if size == 0 {
        return Vec::new();
    }

    let lo = (min * 0.9).max(0.0);
    let hi = max * 1.05;
    if size == 1 || hi <= lo {
        return vec![lo];
    }

    let step = (hi - lo) / (size - 1) as f64;
    (0..size).map(|i| lo + step * i as f64).collect()
}

/// Epanechnikov kernel density estimator with a fixed bandwidth
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct KernelDensity {
    bandwidth: f64,
}

impl KernelDensity {
    /// Create an estimator with the given bandwidth
    ///
    /// A non-positive or non-finite bandwidth is replaced by 1, the same
    /// terminal fallback as [`select_bandwidth`].
    pub fn new(bandwidth: f64) -> Self {
        let bandwidth = if bandwidth.is_finite() && bandwidth > 0.0 {
            bandwidth
        } else {
            1.0
        };
        Self { bandwidth }
    }

    /// The bandwidth in use
    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    /// Epanechnikov kernel: `0.75 * (1 - (u/h)^2) / h` for `|u/h| <= 1`
    pub fn kernel(&self, u: f64) -> f64 {
        let t = u / self.bandwidth;
        if t.abs() <= 1.0 {
            0.75 * (1.0 - t * t) / self.bandwidth
        } else {
            0.0
        }
    }

    /// Evaluate the density of a sample at every grid position
    ///
    /// Density at `x` is the mean of `kernel(x - v)` over the sample.
    /// An empty sample yields a zero curve on the same grid, so callers
    /// always get one aligned curve per sample.
    pub fn estimate(&self, samples: &[f64], grid: &[f64]) -> Vec<DensityPoint> {
        grid.iter()
            .map(|&x| {
                let density = if samples.is_empty() {
                    0.0
                } else {
                    samples.iter().map(|&v| self.kernel(x - v)).sum::<f64>()
                        / samples.len() as f64
                };
                DensityPoint { x, density }
            })
            .collect()
    }
}
