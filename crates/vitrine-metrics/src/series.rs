//! Revenue table reshaping
//!
//! The revenue table is wide: one row per year, one column per brand
//! (`<Brand>_Revenue_Million_USD`). The line, bar, and bubble charts
//! each want a different shape of the same numbers, so the reshapes live
//! together here. Rows with a non-numeric `Year` are skipped; a missing
//! or non-numeric revenue cell reads as 0.

use serde::{Deserialize, Serialize};

use vitrine_domain::Brand;
use vitrine_table::{Row, Table};

/// Column holding the observation year in the revenue table
pub const YEAR_COLUMN: &str = "Year";

/// One year of one brand's revenue
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct SeriesPoint {
    pub year: i32,
    /// Revenue, million USD
    pub revenue: f64,
}

/// A brand's revenue over time, ordered ascending by year
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandSeries {
    pub brand: Brand,
    pub points: Vec<SeriesPoint>,
}

/// A brand's revenue in the latest observed year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrandRevenue {
    pub brand: Brand,
    pub revenue: f64,
}

/// One long-format observation (bubble chart shape)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RevenuePoint {
    pub year: i32,
    pub brand: Brand,
    pub revenue: f64,
}

/// Rows with a usable year, sorted ascending by year
///
/// The sort is stable, so rows sharing a year keep their source order.
fn year_rows(table: &Table) -> Vec<(i32, &Row)> {
    let mut rows: Vec<(i32, &Row)> = table
        .rows()
        .iter()
        .filter_map(|row| row.number(YEAR_COLUMN).map(|y| (y as i32, row)))
        .collect();
    rows.sort_by_key(|(year, _)| *year);
    rows
}

fn brand_revenue(row: &Row, brand: Brand) -> f64 {
    row.number(&brand.revenue_column()).unwrap_or(0.0)
}

/// Per-brand revenue series for the multi-line chart
///
/// Always one series per brand in [`Brand::ALL`] order; an empty table
/// yields empty series rather than no series.
pub fn revenue_series(table: &Table) -> Vec<BrandSeries> {
    let rows = year_rows(table);
    Brand::ALL
        .into_iter()
        .map(|brand| BrandSeries {
            brand,
            points: rows
                .iter()
                .map(|(year, row)| SeriesPoint {
                    year: *year,
                    revenue: brand_revenue(row, brand),
                })
                .collect(),
        })
        .collect()
}

/// Per-brand revenue from the latest observed year (bar chart)
///
/// The latest row is the one with the maximum numeric `Year`, not the
/// last row in source order; tables that arrive unsorted still resolve
/// to the right year. All brands read 0 when no row has a usable year.
pub fn latest_revenue(table: &Table) -> Vec<BrandRevenue> {
    let rows = year_rows(table);
    let latest = rows.last().map(|(_, row)| *row);
    Brand::ALL
        .into_iter()
        .map(|brand| BrandRevenue {
            brand,
            revenue: latest.map(|row| brand_revenue(row, brand)).unwrap_or(0.0),
        })
        .collect()
}

/// Wide to long: one point per (year, brand) for the bubble chart
///
/// Year-major, brands in [`Brand::ALL`] order within a year.
pub fn revenue_long(table: &Table) -> Vec<RevenuePoint> {
    year_rows(table)
        .into_iter()
        .flat_map(|(year, row)| {
            Brand::ALL.into_iter().map(move |brand| RevenuePoint {
                year,
                brand,
                revenue: brand_revenue(row, brand),
            })
        })
        .collect()
}
