//! End-to-end pipeline tests on realistic source tables
//!
//! Exercises the aggregation and density pipelines together the way the
//! dashboard does: build every chart structure from one snapshot of the
//! loaded tables, toggle the density metric, re-run on resize.

use vitrine_domain::{Brand, BrandMetric, PriceMetric};
use vitrine_metrics::{
    latest_revenue, revenue_long, revenue_series, BrandProfiles, CategoryBreakdown,
    DensityComparison, DensityConfig, DensityError, PriceSamples,
};
use vitrine_table::Table;

fn revenue_table() -> Table {
    Table::from_records(
        vec![
            "Year".into(),
            "Gucci_Revenue_Million_USD".into(),
            "Coach_Revenue_Million_USD".into(),
            "Hermes_Revenue_Million_USD".into(),
        ],
        vec![
            vec!["2020".into(), "1400".into(), "420".into(), "640".into()],
            vec!["2021".into(), "1550".into(), "445".into(), "720".into()],
            vec!["2022".into(), "1700".into(), "460".into(), "810".into()],
            vec!["2023".into(), "1850".into(), "480".into(), "905".into()],
            vec!["2024".into(), "2000".into(), "500".into(), "1000".into()],
        ],
    )
}

fn resale_table() -> Table {
    Table::from_records(
        vec![
            "Brand".into(),
            "Category".into(),
            "Average_Price_USD".into(),
            "Seller_Price_USD".into(),
        ],
        vec![
            vec!["Hermes".into(), "Bags".into(), "11500".into(), "10200".into()],
            vec!["Hermes".into(), "Scarves".into(), "480".into(), "410".into()],
            vec!["Hermes".into(), "Belts".into(), "720".into(), "650".into()],
            vec!["Gucci".into(), "Bags".into(), "1900".into(), "1600".into()],
            vec!["Gucci".into(), "Shoes".into(), "840".into(), "700".into()],
            vec!["Coach".into(), "Bags".into(), "360".into(), "290".into()],
        ],
    )
}

fn region_table() -> Table {
    Table::from_records(
        vec!["brand".into(), "category".into(), "region".into()],
        vec![
            vec!["Hermes".into(), "Bags".into(), "EU".into()],
            vec!["Hermes".into(), "Scarves".into(), "EU".into()],
            vec!["Hermes".into(), "Belts".into(), "US".into()],
            vec!["Gucci".into(), "Bags".into(), "EU".into()],
            vec!["Gucci".into(), "Shoes".into(), "APAC".into()],
            vec!["Coach".into(), "Bags".into(), "US".into()],
        ],
    )
}

const SEARCH_TEXT: &str = "Category: Luxury fashion, worldwide\n\n\
Region,Hermès: (interest),Gucci: (interest),Coach: (interest)\n\
France,62%,48%,12%\n\
Italy,40%,70%,8%\n\
United States,33%,44%,38%\n";

// === Radar profile ===

#[test]
fn radar_profile_covers_every_brand_and_metric() {
    let profiles = BrandProfiles::aggregate(
        &revenue_table(),
        &resale_table(),
        SEARCH_TEXT,
        &region_table(),
    );

    for brand in Brand::ALL {
        for metric in BrandMetric::ALL {
            let value = profiles.normalized(brand, metric);
            assert!(
                (0.0..=1.0).contains(&value),
                "{brand}/{metric} out of range: {value}"
            );
        }
        assert_eq!(profiles.axis_values(brand).len(), BrandMetric::ALL.len());
    }

    // Each metric has a winner at exactly 1.0.
    for metric in BrandMetric::ALL {
        let max = Brand::ALL
            .into_iter()
            .map(|b| profiles.normalized(b, metric))
            .fold(0.0_f64, f64::max);
        assert!((max - 1.0).abs() < 1e-10);
    }
}

#[test]
fn radar_profile_expected_winners() {
    let profiles = BrandProfiles::aggregate(
        &revenue_table(),
        &resale_table(),
        SEARCH_TEXT,
        &region_table(),
    );

    // Gucci leads revenue, Hermes leads resale price and diversity.
    assert_eq!(profiles.normalized(Brand::Gucci, BrandMetric::Revenue), 1.0);
    assert_eq!(profiles.normalized(Brand::Hermes, BrandMetric::AvgResale), 1.0);
    assert_eq!(
        profiles.normalized(Brand::Hermes, BrandMetric::CategoryDiversity),
        1.0
    );

    // Raw revenue flows through from the 2024 row.
    assert_eq!(profiles.raw(Brand::Coach, BrandMetric::Revenue), 500.0);
    assert!((profiles.normalized(Brand::Coach, BrandMetric::Revenue) - 0.25).abs() < 1e-10);
}

#[test]
fn radar_profile_survives_missing_tables() {
    // Simulates partial load failure: only the revenue table arrived.
    let empty = Table::new(vec![]);
    let profiles = BrandProfiles::aggregate(&revenue_table(), &empty, "", &empty);

    assert_eq!(profiles.normalized(Brand::Gucci, BrandMetric::Revenue), 1.0);
    for brand in Brand::ALL {
        assert_eq!(profiles.normalized(brand, BrandMetric::AvgResale), 0.0);
        assert_eq!(profiles.normalized(brand, BrandMetric::SearchInterest), 0.0);
    }
}

// === Density comparison ===

#[test]
fn density_curves_align_across_brands_and_metrics() {
    let samples = PriceSamples::from_table(&resale_table());

    for metric in PriceMetric::ALL {
        let comparison =
            DensityComparison::compute(&samples, metric, &DensityConfig::default()).unwrap();
        let grid = comparison.grid();
        assert_eq!(grid.len(), 80);
        for curve in &comparison.curves {
            let xs: Vec<f64> = curve.points.iter().map(|p| p.x).collect();
            assert_eq!(xs, grid, "misaligned grid for {}", curve.brand);
        }
        assert!(comparison.max_density() > 0.0);
    }
}

#[test]
fn density_metric_toggle_changes_extent_not_shape() {
    let samples = PriceSamples::from_table(&resale_table());
    let config = DensityConfig::default();

    let price = DensityComparison::compute(&samples, PriceMetric::PriceUsd, &config).unwrap();
    let seller = DensityComparison::compute(&samples, PriceMetric::SellerPrice, &config).unwrap();

    // Seller prices run lower, so the shared grid tops out lower too.
    let price_hi = *price.grid().last().unwrap();
    let seller_hi = *seller.grid().last().unwrap();
    assert!(seller_hi < price_hi);

    // Same brands, same curve lengths either way.
    assert_eq!(price.curves.len(), seller.curves.len());
}

#[test]
fn density_imputation_example_from_partial_coverage() {
    // Only Hermes rows carry prices; both metrics for every other brand
    // stay empty and Hermes fills both of its own metric slots.
    let table = Table::from_records(
        vec!["Brand".into(), "Price_USD".into()],
        vec![
            vec!["Hermes".into(), "100".into()],
            vec!["Hermes".into(), "200".into()],
            vec!["Hermes".into(), "300".into()],
        ],
    );
    let samples = PriceSamples::from_table(&table);

    assert_eq!(
        samples.samples(Brand::Hermes, PriceMetric::PriceUsd),
        [100.0, 200.0, 300.0]
    );
    assert_eq!(
        samples.samples(Brand::Hermes, PriceMetric::SellerPrice),
        [100.0, 200.0, 300.0]
    );

    // The metric as a whole still has data, so curves render; the
    // uncovered brands get aligned zero curves.
    let comparison =
        DensityComparison::compute(&samples, PriceMetric::SellerPrice, &DensityConfig::default())
            .unwrap();
    let gucci = comparison
        .curves
        .iter()
        .find(|c| c.brand == Brand::Gucci)
        .unwrap();
    assert!(gucci.points.iter().all(|p| p.density == 0.0));
}

#[test]
fn density_no_data_fires_only_when_all_brands_empty() {
    let empty = PriceSamples::from_table(&Table::new(vec![]));
    for metric in PriceMetric::ALL {
        assert!(matches!(
            DensityComparison::compute(&empty, metric, &DensityConfig::default()),
            Err(DensityError::NoSamples { .. })
        ));
    }

    let covered = PriceSamples::from_table(&resale_table());
    for metric in PriceMetric::ALL {
        assert!(DensityComparison::compute(&covered, metric, &DensityConfig::default()).is_ok());
    }
}

// === Re-render idempotence ===

#[test]
fn recomputation_is_bit_identical() {
    // A resize or visibility re-entry recomputes everything from the
    // same snapshot; outputs must match exactly, not approximately.
    let profiles_json = |p: &BrandProfiles| serde_json::to_string(p).unwrap();
    let a = BrandProfiles::aggregate(
        &revenue_table(),
        &resale_table(),
        SEARCH_TEXT,
        &region_table(),
    );
    let b = BrandProfiles::aggregate(
        &revenue_table(),
        &resale_table(),
        SEARCH_TEXT,
        &region_table(),
    );
    // Serialize through a stable shape before comparing; HashMap
    // iteration order is not part of the contract.
    let a_ref = &a;
    let mut raws_a: Vec<(String, f64)> = Brand::ALL
        .into_iter()
        .flat_map(|brand| {
            BrandMetric::ALL
                .into_iter()
                .map(move |m| (format!("{brand}/{m}"), a_ref.normalized(brand, m)))
        })
        .collect();
    let b_ref = &b;
    let mut raws_b: Vec<(String, f64)> = Brand::ALL
        .into_iter()
        .flat_map(|brand| {
            BrandMetric::ALL
                .into_iter()
                .map(move |m| (format!("{brand}/{m}"), b_ref.normalized(brand, m)))
        })
        .collect();
    raws_a.sort_by(|x, y| x.0.cmp(&y.0));
    raws_b.sort_by(|x, y| x.0.cmp(&y.0));
    assert_eq!(raws_a, raws_b);
    // And both serialize without error for the rendering layer.
    assert!(!profiles_json(&a).is_empty());

    let samples = PriceSamples::from_table(&resale_table());
    let da =
        DensityComparison::compute(&samples, PriceMetric::PriceUsd, &DensityConfig::default())
            .unwrap();
    let db =
        DensityComparison::compute(&samples, PriceMetric::PriceUsd, &DensityConfig::default())
            .unwrap();
    for (ca, cb) in da.curves.iter().zip(&db.curves) {
        assert_eq!(ca.points, cb.points);
    }
}

// === Supplemental chart builders ===

#[test]
fn series_builders_share_the_revenue_table() {
    let table = revenue_table();

    let series = revenue_series(&table);
    assert_eq!(series.len(), 3);
    for s in &series {
        assert_eq!(s.points.len(), 5);
        let years: Vec<i32> = s.points.iter().map(|p| p.year).collect();
        assert_eq!(years, [2020, 2021, 2022, 2023, 2024]);
    }

    let latest = latest_revenue(&table);
    let gucci = latest.iter().find(|r| r.brand == Brand::Gucci).unwrap();
    assert_eq!(gucci.revenue, 2000.0);

    let long = revenue_long(&table);
    assert_eq!(long.len(), 15);
    assert!(long.iter().filter(|p| p.brand == Brand::Coach).count() == 5);
}

#[test]
fn breakdown_stacks_are_consistent_with_the_resale_table() {
    let breakdown = CategoryBreakdown::from_table(&resale_table());

    assert_eq!(breakdown.categories, ["Bags", "Scarves", "Belts", "Shoes"]);
    assert_eq!(breakdown.stacks.len(), 3);

    for stack in &breakdown.stacks {
        assert_eq!(stack.segments.len(), breakdown.categories.len());
        let mut cursor = 0.0;
        for segment in &stack.segments {
            assert_eq!(segment.start, cursor);
            assert!(segment.height() >= 0.0);
            cursor = segment.end;
        }
        assert_eq!(stack.total(), cursor);
    }

    // Hermes: 11500 + 480 + 720.
    let hermes = &breakdown.stacks[0];
    assert!((hermes.total() - 12700.0).abs() < 1e-10);
    assert_eq!(breakdown.max_total(), hermes.total());
}
