#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Derived types produced by the analytics layer.
//!
//! These are ephemeral, computed-on-demand values: locality summaries,
//! chart points, display table rows, and per-locality comparison
//! outcomes. They are serialized to JSON for the REST API and never
//! persisted.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Three-way price trend classification.
///
/// Derived from the percent change of the flat rate between the first
/// and last year on record: above +5% is increasing, below −5% is
/// decreasing, anything in between is stable.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PriceTrend {
    /// Flat rate rose more than 5% over the period.
    Increasing,
    /// Flat rate fell more than 5% over the period.
    Decreasing,
    /// Change within ±5%, or not enough data to tell.
    #[default]
    Stable,
}

impl PriceTrend {
    /// Title-case label for narrative text.
    #[must_use]
    pub const fn capitalized(self) -> &'static str {
        match self {
            Self::Increasing => "Increasing",
            Self::Decreasing => "Decreasing",
            Self::Stable => "Stable",
        }
    }
}

/// Policy for averaging the flat rate across years.
///
/// Years with no flat transactions carry a zero rate; whether those
/// zeros belong in the mean is a judgement call, so it is an explicit
/// option rather than baked in. `IncludeZeros` reproduces the
/// historical numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum RateAveraging {
    /// Mean over every record, zeros included.
    #[default]
    IncludeZeros,
    /// Mean over records with a non-zero rate only.
    ExcludeZeros,
}

/// Options for metric aggregation.
#[derive(Debug, Clone, Copy, Default)]
pub struct AggregateOptions {
    /// How to average the flat rate across years.
    pub rate_averaging: RateAveraging,
}

/// Summary statistics for one locality over its recorded years.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalitySummary {
    /// Locality name, canonical stored casing.
    pub locality: String,
    /// First year on record.
    pub year_start: i32,
    /// Last year on record.
    pub year_end: i32,
    /// Number of distinct years present (gaps tolerated).
    pub distinct_years: usize,
    /// Total sales value in crores.
    pub total_sales_cr: f64,
    /// Average sales per recorded year, in crores.
    pub avg_annual_sales_cr: f64,
    /// Total units sold across the period.
    pub total_units: u64,
    /// Average units sold per recorded year.
    pub avg_annual_units: f64,
    /// Average flat rate per sqft (per the configured averaging policy).
    pub avg_flat_rate: f64,
    /// Flat rate of the most recent year.
    pub latest_flat_rate: f64,
    /// Percent change of the flat rate, first year to last.
    pub price_change_pct: f64,
    /// Trend classification of the price change.
    pub trend: PriceTrend,
    /// Deterministic multi-section narrative text.
    pub narrative: String,
}

impl LocalitySummary {
    /// Qualitative market-activity label from average annual sales.
    #[must_use]
    pub fn market_activity(&self) -> &'static str {
        if self.avg_annual_sales_cr > 500.0 {
            "High"
        } else if self.avg_annual_sales_cr > 200.0 {
            "Moderate"
        } else {
            "Developing"
        }
    }

    /// Qualitative demand label from average annual unit volume.
    #[must_use]
    pub fn demand_strength(&self) -> &'static str {
        if self.avg_annual_units > 1000.0 {
            "strong"
        } else if self.avg_annual_units > 500.0 {
            "moderate"
        } else {
            "steady"
        }
    }

    /// Price-tier commentary sentence from the average flat rate.
    #[must_use]
    pub fn price_tier_commentary(&self) -> &'static str {
        if self.avg_flat_rate > 9000.0 {
            "This is a premium locality with high market activity."
        } else if self.avg_flat_rate > 7000.0 {
            "This is an emerging area with good growth potential."
        } else {
            "This area offers value for money with steady appreciation."
        }
    }

    /// Display form of the year range, e.g. `2019-2024`.
    #[must_use]
    pub fn year_range_label(&self) -> String {
        format!("{}-{}", self.year_start, self.year_end)
    }
}

/// Year span of a market-stats payload.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearRange {
    /// First year.
    pub start: i32,
    /// Last year.
    pub end: i32,
}

/// Compact statistics handed to the AI summarizer.
///
/// Also the wire shape of the `data` object accepted by the on-demand
/// summary endpoint, so every field is defaulted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MarketStats {
    /// Locality name.
    pub area: String,
    /// Year span the statistics cover.
    pub year_range: YearRange,
    /// Total sales value in crores.
    pub sales_total: f64,
    /// Average flat rate per sqft.
    pub avg_price: f64,
    /// Total units sold.
    pub total_units: u64,
    /// Price trend classification.
    pub price_trend: PriceTrend,
    /// Percent change of the flat rate over the period.
    pub price_change: f64,
}

/// One chart point, one source record (one locality-year).
///
/// `flat_rate` is serialized as `null` when the stored rate is zero;
/// the remaining optional fields are omitted entirely for records
/// where they do not apply, so a mixed series is expected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPoint {
    /// Transaction year.
    pub year: i32,
    /// Total sales in crores, rounded to 2 decimals.
    pub total_sales: f64,
    /// Units sold.
    pub total_sold: i64,
    /// Flat rate, rounded to 2 decimals; `null` when zero in the source.
    pub flat_rate: Option<f64>,
    /// Office rate, present when above zero for this record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub office_rate: Option<f64>,
    /// Shop rate, present when above zero for this record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shop_rate: Option<f64>,
    /// Carpet area supplied, present when above zero for this record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carpet_area: Option<f64>,
}

/// One display/export table row with fixed column labels.
///
/// Values are pre-formatted strings meant for direct rendering, not
/// further computation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableRow {
    /// Transaction year.
    #[serde(rename = "Year")]
    pub year: i32,
    /// Locality name.
    #[serde(rename = "Area")]
    pub area: String,
    /// Total sales in crores, 2 decimals.
    #[serde(rename = "Total Sales (₹ Cr)")]
    pub total_sales: String,
    /// Units sold with thousands separators.
    #[serde(rename = "Units Sold")]
    pub units_sold: String,
    /// Flat rate, 2 decimals.
    #[serde(rename = "Flat Rate (₹/sqft)")]
    pub flat_rate: String,
    /// Carpet area with thousands separators, present when above zero.
    #[serde(rename = "Carpet Area (sqft)", skip_serializing_if = "Option::is_none")]
    pub carpet_area: Option<String>,
}

/// Side-by-side comparison figures for one locality.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonEntry {
    /// Locality name.
    pub area: String,
    /// Average flat rate per sqft.
    pub avg_flat_rate: f64,
    /// Total sales in crores.
    pub total_sales: f64,
    /// Total units sold.
    pub total_units_sold: u64,
    /// Per-year chart series.
    pub chart_data: Vec<ChartPoint>,
}

/// Result of comparing one requested locality.
///
/// A locality that resolved but has no records yields an explicit
/// `NoData` entry rather than being dropped, so callers can tell
/// per-locality absence apart from total failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ComparisonOutcome {
    /// Comparison figures were computed.
    Data(ComparisonEntry),
    /// The locality had no matching records.
    #[serde(rename_all = "camelCase")]
    NoData {
        /// Locality name.
        area: String,
        /// Human-readable explanation.
        error: String,
    },
}
