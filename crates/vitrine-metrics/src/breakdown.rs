//! Brand-by-category price breakdown
//!
//! Feeds the stacked bar chart: one stack per brand, one segment per
//! category, segment heights from the resale table's average prices.
//! Unlike the radar and density pipelines, brands and categories here
//! are discovered from the data in first-appearance order rather than
//! taken from the fixed brand set, so the chart reflects whatever the
//! table actually contains.

use serde::{Deserialize, Serialize};

use vitrine_table::Table;

/// Brand column in the resale table
const BRAND_COLUMN: &str = "Brand";
/// Category column in the resale table
const CATEGORY_COLUMN: &str = "Category";
/// Price column in the resale table
const PRICE_COLUMN: &str = "Average_Price_USD";

/// One stacked segment: a category's slice of a brand's bar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackSegment {
    pub category: String,
    /// Cumulative lower edge
    pub start: f64,
    /// Cumulative upper edge
    pub end: f64,
}

impl StackSegment {
    /// The segment's own height
    pub fn height(&self) -> f64 {
        self.end - self.start
    }
}

/// One brand's stacked bar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandStack {
    pub brand: String,
    /// Segments in shared category order, cumulatively stacked from 0
    pub segments: Vec<StackSegment>,
}

impl BrandStack {
    /// Total bar height (upper edge of the last segment)
    pub fn total(&self) -> f64 {
        self.segments.last().map(|s| s.end).unwrap_or(0.0)
    }
}

/// The full stacked-bar dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    /// Categories in first-appearance order (the stacking order)
    pub categories: Vec<String>,
    /// One stack per discovered brand, in first-appearance order
    pub stacks: Vec<BrandStack>,
}

impl CategoryBreakdown {
    /// Build the breakdown from the resale table
    ///
    /// Brands and categories come from the data in first-appearance
    /// order; blank cells are skipped. Each (brand, category) cell takes
    /// the price of the first row matching both exactly, or 0 when no
    /// row matches or the price fails to parse.
    pub fn from_table(table: &Table) -> Self {
        let brands = distinct_values(table, BRAND_COLUMN);
        let categories = distinct_values(table, CATEGORY_COLUMN);

        let stacks = brands
            .into_iter()
            .map(|brand| {
                let mut cursor = 0.0;
                let segments = categories
                    .iter()
                    .map(|category| {
                        let height = cell_price(table, &brand, category);
                        let segment = StackSegment {
                            category: category.clone(),
                            start: cursor,
                            end: cursor + height,
                        };
                        cursor += height;
                        segment
                    })
                    .collect();
                BrandStack { brand, segments }
            })
            .collect();

        Self { categories, stacks }
    }

    /// Tallest stack across brands (the y-axis extent)
    pub fn max_total(&self) -> f64 {
        self.stacks
            .iter()
            .map(BrandStack::total)
            .fold(0.0_f64, f64::max)
    }
}

/// Distinct non-blank values of a column, in first-appearance order
fn distinct_values(table: &Table, column: &str) -> Vec<String> {
    let mut seen = Vec::new();
    for row in table.rows() {
        let Some(value) = row.get(column) else { continue };
        if value.trim().is_empty() {
            continue;
        }
        if !seen.iter().any(|v| v == value) {
            seen.push(value.to_string());
        }
    }
    seen
}

/// Price of the first row matching brand and category exactly
fn cell_price(table: &Table, brand: &str, category: &str) -> f64 {
    table
        .rows()
        .iter()
        .find(|row| row.get(BRAND_COLUMN) == Some(brand) && row.get(CATEGORY_COLUMN) == Some(category))
        .and_then(|row| row.number(PRICE_COLUMN))
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resale_table() -> Table {
        Table::from_records(
            vec!["Brand".into(), "Category".into(), "Average_Price_USD".into()],
            vec![
                vec!["Hermes".into(), "Bags".into(), "12000".into()],
                vec!["Gucci".into(), "Bags".into(), "1800".into()],
                vec!["Hermes".into(), "Scarves".into(), "450".into()],
                vec!["Gucci".into(), "Shoes".into(), "900".into()],
                vec!["Coach".into(), "Bags".into(), "350".into()],
            ],
        )
    }

    #[test]
    fn test_discovery_order() {
        let breakdown = CategoryBreakdown::from_table(&resale_table());
        let brands: Vec<&str> = breakdown.stacks.iter().map(|s| s.brand.as_str()).collect();
        assert_eq!(brands, ["Hermes", "Gucci", "Coach"]);
        assert_eq!(breakdown.categories, ["Bags", "Scarves", "Shoes"]);
    }

    #[test]
    fn test_segments_are_contiguous_from_zero() {
        let breakdown = CategoryBreakdown::from_table(&resale_table());
        for stack in &breakdown.stacks {
            assert_eq!(stack.segments[0].start, 0.0);
            for pair in stack.segments.windows(2) {
                assert_eq!(pair[0].end, pair[1].start);
            }
            assert_eq!(stack.total(), stack.segments.last().unwrap().end);
        }
    }

    #[test]
    fn test_missing_combination_is_zero_height() {
        let breakdown = CategoryBreakdown::from_table(&resale_table());
        let hermes = &breakdown.stacks[0];
        // Hermes has no Shoes row.
        assert_eq!(hermes.segments[2].height(), 0.0);
        assert!((hermes.total() - 12450.0).abs() < 1e-10);
    }

    #[test]
    fn test_max_total() {
        let breakdown = CategoryBreakdown::from_table(&resale_table());
        assert!((breakdown.max_total() - 12450.0).abs() < 1e-10);
    }

    #[test]
    fn test_empty_table() {
        let breakdown = CategoryBreakdown::from_table(&Table::new(vec![]));
        assert!(breakdown.categories.is_empty());
        assert!(breakdown.stacks.is_empty());
        assert_eq!(breakdown.max_total(), 0.0);
    }

    #[test]
    fn test_first_matching_row_wins() {
        let table = Table::from_records(
            vec!["Brand".into(), "Category".into(), "Average_Price_USD".into()],
            vec![
                vec!["Coach".into(), "Bags".into(), "350".into()],
                vec!["Coach".into(), "Bags".into(), "9999".into()],
            ],
        );
        let breakdown = CategoryBreakdown::from_table(&table);
        assert_eq!(breakdown.stacks[0].segments[0].height(), 350.0);
    }
}
