//! Metric aggregation and normalization
//!
//! Joins four independent source tables on the brand key, derives one
//! scalar per (brand, metric), then min-max normalizes each metric
//! across brands so the radar chart compares shapes rather than units.
//!
//! Degradation is always local: a missing table, unmatched column, or
//! unparsable cell contributes 0 (or drops out of a mean) and the
//! pipeline never fails. Every brand receives every metric.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use vitrine_domain::{Brand, BrandMetric};
use vitrine_stats::mean;
use vitrine_table::{parse_csv_text, parse_percent, Table};

use crate::series::latest_revenue;

/// Brand column in the resale table
const RESALE_BRAND_COLUMN: &str = "Brand";
/// Price column in the resale table
const RESALE_PRICE_COLUMN: &str = "Average_Price_USD";
/// Brand column candidates in the region table (casing varies)
const REGION_BRAND_COLUMNS: [&str; 2] = ["brand", "Brand"];
/// Category column candidates in the region table
const REGION_CATEGORY_COLUMNS: [&str; 2] = ["category", "Category"];

/// Raw and normalized metric values for every brand
///
/// Raw values are non-negative scalars in each metric's own unit;
/// normalized values divide by the per-metric maximum across brands and
/// land in `[0, 1]`. A metric that is 0 for every brand normalizes to 0
/// for every brand (the divisor is forced to 1, never 0).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandProfiles {
    raw: HashMap<Brand, HashMap<BrandMetric, f64>>,
    normalized: HashMap<Brand, HashMap<BrandMetric, f64>>,
}

impl BrandProfiles {
    /// Aggregate the four source tables into per-brand profiles
    ///
    /// - `revenue`: wide table with `Year` and
    ///   `<Brand>_Revenue_Million_USD` columns; the row with the
    ///   maximum year supplies the Revenue metric
    /// - `resale`: `Brand` / `Average_Price_USD` rows; AvgResale is the
    ///   mean price over a brand's rows
    /// - `search_interest`: raw CSV text, possibly with a leading
    ///   metadata line; SearchInterest is the mean of the brand
    ///   column's parsed percentages
    /// - `region`: brand/category rows; CategoryDiversity counts a
    ///   brand's distinct non-empty categories
    pub fn aggregate(
        revenue: &Table,
        resale: &Table,
        search_interest: &str,
        region: &Table,
    ) -> Self {
        let revenue_values: HashMap<Brand, f64> = latest_revenue(revenue)
            .into_iter()
            .map(|r| (r.brand, r.revenue))
            .collect();
        let resale_values = average_resale(resale);
        let search_values = search_interest_means(search_interest);
        let diversity_values = category_diversity(region);

        let mut raw = HashMap::new();
        for brand in Brand::ALL {
            let mut metrics = HashMap::new();
            let value_of = |map: &HashMap<Brand, f64>| map.get(&brand).copied().unwrap_or(0.0);
            metrics.insert(BrandMetric::Revenue, value_of(&revenue_values));
            metrics.insert(BrandMetric::AvgResale, value_of(&resale_values));
            metrics.insert(BrandMetric::SearchInterest, value_of(&search_values));
            metrics.insert(BrandMetric::CategoryDiversity, value_of(&diversity_values));
            raw.insert(brand, metrics);
        }

        let normalized = normalize(&raw);
        Self { raw, normalized }
    }

    /// Raw value for one (brand, metric)
    pub fn raw(&self, brand: Brand, metric: BrandMetric) -> f64 {
        self.raw
            .get(&brand)
            .and_then(|m| m.get(&metric))
            .copied()
            .unwrap_or(0.0)
    }

    /// Normalized value for one (brand, metric), always in `[0, 1]`
    pub fn normalized(&self, brand: Brand, metric: BrandMetric) -> f64 {
        self.normalized
            .get(&brand)
            .and_then(|m| m.get(&metric))
            .copied()
            .unwrap_or(0.0)
    }

    /// Full normalized mapping, brand to metric to value
    pub fn normalized_map(&self) -> &HashMap<Brand, HashMap<BrandMetric, f64>> {
        &self.normalized
    }

    /// A brand's normalized values in [`BrandMetric::ALL`] axis order
    ///
    /// This is the radar polygon for one brand.
    pub fn axis_values(&self, brand: Brand) -> Vec<f64> {
        BrandMetric::ALL
            .into_iter()
            .map(|metric| self.normalized(brand, metric))
            .collect()
    }
}

/// Divide each metric by its maximum across brands
///
/// A non-positive (or non-finite) maximum forces the divisor to 1 so a
/// fully-zero metric stays zero instead of dividing by zero. Values are
/// clamped at 0 from below; raws are non-negative by construction, so
/// the result lands in `[0, 1]`.
fn normalize(
    raw: &HashMap<Brand, HashMap<BrandMetric, f64>>,
) -> HashMap<Brand, HashMap<BrandMetric, f64>> {
    let mut divisors = HashMap::new();
    for metric in BrandMetric::ALL {
        let max = Brand::ALL
            .into_iter()
            .map(|brand| {
                raw.get(&brand)
                    .and_then(|m| m.get(&metric))
                    .copied()
                    .unwrap_or(0.0)
            })
            .fold(0.0_f64, f64::max);
        let divisor = if max.is_finite() && max > 0.0 { max } else { 1.0 };
        divisors.insert(metric, divisor);
    }

    raw.iter()
        .map(|(&brand, metrics)| {
            let scaled = metrics
                .iter()
                .map(|(&metric, &value)| (metric, (value / divisors[&metric]).max(0.0)))
                .collect();
            (brand, scaled)
        })
        .collect()
}

/// Mean resale price per brand
///
/// Rows match a brand case-insensitively on the `Brand` cell; prices
/// that fail numeric coercion drop out of the mean. A brand with no
/// usable rows is absent from the result (and defaults to 0 upstream).
fn average_resale(resale: &Table) -> HashMap<Brand, f64> {
    let mut values = HashMap::new();
    for brand in Brand::ALL {
        let prices: Vec<f64> = resale
            .rows()
            .iter()
            .filter(|row| {
                row.get(RESALE_BRAND_COLUMN)
                    .is_some_and(|cell| brand.matches(cell))
            })
            .filter_map(|row| row.number(RESALE_PRICE_COLUMN))
            .collect();
        if let Some(avg) = mean(&prices) {
            values.insert(brand, avg);
        }
    }
    values
}

/// Mean search interest per brand from the raw CSV export
///
/// The export text is cleaned and parsed first; a text that fails to
/// parse at all contributes nothing (all brands default to 0 upstream).
/// Each brand's column is located by its name stem; cells parse under
/// the percentage grammar and unparsable cells drop out of the mean.
fn search_interest_means(text: &str) -> HashMap<Brand, f64> {
    let Ok(table) = parse_csv_text(text) else {
        return HashMap::new();
    };

    let mut values = HashMap::new();
    for brand in Brand::ALL {
        let Some(column) = table.resolve_column(&[brand.search_keyword()]) else {
            continue;
        };
        let percentages: Vec<f64> = table
            .rows()
            .iter()
            .filter_map(|row| row.get(column))
            .filter_map(parse_percent)
            .collect();
        if let Some(avg) = mean(&percentages) {
            values.insert(brand, avg);
        }
    }
    values
}

/// Distinct-category count per brand from the region table
///
/// Brand and category cells accept either header casing. Categories are
/// trimmed; empty strings don't count; distinctness is case-sensitive.
fn category_diversity(region: &Table) -> HashMap<Brand, f64> {
    let mut values = HashMap::new();
    for brand in Brand::ALL {
        let categories: HashSet<&str> = region
            .rows()
            .iter()
            .filter(|row| {
                row.get_any(&REGION_BRAND_COLUMNS)
                    .is_some_and(|cell| brand.matches(cell))
            })
            .filter_map(|row| row.get_any(&REGION_CATEGORY_COLUMNS))
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .collect();
        values.insert(brand, categories.len() as f64);
    }
    values
}
