//! One-pass sample summaries
//!
//! The pipelines need the same handful of reductions everywhere: how
//! many usable values, their extent, their mean. Non-finite values are
//! excluded up front so downstream arithmetic never sees NaN.

use serde::{Deserialize, Serialize};

/// Count, extent, and mean of the finite values in a sample
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct SampleSummary {
    /// Number of finite values
    pub count: u64,
    /// Minimum value
    pub min: f64,
    /// Maximum value
    pub max: f64,
    /// Arithmetic mean
    pub mean: f64,
}

impl SampleSummary {
    /// Summarize a sample, ignoring non-finite values
    ///
    /// Returns `None` when no finite values remain.
    pub fn from_data(data: &[f64]) -> Option<Self> {
        let mut count = 0u64;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;

        for &value in data {
            if !value.is_finite() {
                continue;
            }
            count += 1;
            min = min.min(value);
            max = max.max(value);
            sum += value;
        }

        if count == 0 {
            return None;
        }

        Some(Self {
            count,
            min,
            max,
            mean: sum / count as f64,
        })
    }

    /// Get the range (max - min)
    pub fn range(&self) -> f64 {
        self.max - self.min
    }
}

/// Arithmetic mean of the finite values in a sample
///
/// Returns `None` for an empty (or all-non-finite) sample; callers map
/// that to their own default rather than dividing by zero.
pub fn mean(data: &[f64]) -> Option<f64> {
    SampleSummary::from_data(data).map(|s| s.mean)
}
