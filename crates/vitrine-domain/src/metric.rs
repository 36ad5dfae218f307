//! Metric enumerations for the radar profile and the density comparison

use std::fmt;

use serde::{Deserialize, Serialize};

/// One axis of the per-brand radar profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum BrandMetric {
    /// Latest-year revenue, million USD
    Revenue,
    /// Arithmetic mean of resale prices, USD
    AvgResale,
    /// Mean search interest across regions, percent
    SearchInterest,
    /// Count of distinct product categories
    CategoryDiversity,
}

impl BrandMetric {
    /// Every metric, in radar axis order
    pub const ALL: [BrandMetric; 4] = [
        BrandMetric::Revenue,
        BrandMetric::AvgResale,
        BrandMetric::SearchInterest,
        BrandMetric::CategoryDiversity,
    ];

    /// Stable identifier used in serialized output
    pub fn name(&self) -> &'static str {
        match self {
            BrandMetric::Revenue => "Revenue",
            BrandMetric::AvgResale => "AvgResale",
            BrandMetric::SearchInterest => "SearchInterest",
            BrandMetric::CategoryDiversity => "CategoryDiversity",
        }
    }
}

impl fmt::Display for BrandMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One of the two interchangeable resale-price metrics
///
/// The two metrics back the same distribution chart; a brand missing one
/// metric borrows the other's samples (cross-metric imputation), so both
/// selections stay renderable with partial source coverage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum PriceMetric {
    /// Listed price in USD
    PriceUsd,
    /// Price realized by the seller
    SellerPrice,
}

impl PriceMetric {
    /// Both metrics, selector order
    pub const ALL: [PriceMetric; 2] = [PriceMetric::PriceUsd, PriceMetric::SellerPrice];

    /// Stable identifier used in serialized output
    pub fn name(&self) -> &'static str {
        match self {
            PriceMetric::PriceUsd => "price_usd",
            PriceMetric::SellerPrice => "seller_price",
        }
    }

    /// Candidate column-name substrings, in priority order
    ///
    /// The generic `seller` stem comes last so an exact `seller_price`
    /// header wins over looser matches. `price_usd` candidates avoid the
    /// bare `price` stem entirely, which would also match `seller_price`.
    pub fn column_keywords(&self) -> &'static [&'static str] {
        match self {
            PriceMetric::PriceUsd => &[
                "price_usd",
                "price usd",
                "priceusd",
                "average_price",
                "average price",
            ],
            PriceMetric::SellerPrice => &["seller_price", "sellerprice", "seller price", "seller"],
        }
    }

    /// The other metric, used as the imputation source
    pub fn other(&self) -> PriceMetric {
        match self {
            PriceMetric::PriceUsd => PriceMetric::SellerPrice,
            PriceMetric::SellerPrice => PriceMetric::PriceUsd,
        }
    }
}

impl fmt::Display for PriceMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_order_is_stable() {
        assert_eq!(BrandMetric::ALL[0], BrandMetric::Revenue);
        assert_eq!(BrandMetric::ALL.len(), 4);
    }

    #[test]
    fn test_price_metric_other_is_involutive() {
        for metric in PriceMetric::ALL {
            assert_eq!(metric.other().other(), metric);
        }
    }

    #[test]
    fn test_price_usd_keywords_skip_generic_price() {
        // A bare "price" keyword would also match a seller_price header.
        assert!(!PriceMetric::PriceUsd.column_keywords().contains(&"price"));
    }
}
