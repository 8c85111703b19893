//! Summary statistics for a single locality.

use std::collections::BTreeSet;

use estate_insights_analytics_models::{
    AggregateOptions, LocalitySummary, MarketStats, PriceTrend, RateAveraging, YearRange,
};
use estate_insights_dataset_models::TransactionRecord;

use crate::fmt::{mean, thousands};
use crate::CRORE;

/// Percent-change threshold separating a stable trend from a move.
pub const TREND_THRESHOLD_PCT: f64 = 5.0;

/// Classifies a percent change into a [`PriceTrend`].
#[must_use]
pub fn classify_trend(price_change_pct: f64) -> PriceTrend {
    if price_change_pct > TREND_THRESHOLD_PCT {
        PriceTrend::Increasing
    } else if price_change_pct < -TREND_THRESHOLD_PCT {
        PriceTrend::Decreasing
    } else {
        PriceTrend::Stable
    }
}

/// Averages flat rates under the configured policy.
#[must_use]
pub fn average_rate(rates: &[f64], policy: RateAveraging) -> f64 {
    match policy {
        RateAveraging::IncludeZeros => mean(rates),
        RateAveraging::ExcludeZeros => {
            let non_zero: Vec<f64> = rates.iter().copied().filter(|r| *r > 0.0).collect();
            mean(&non_zero)
        }
    }
}

/// Computes the [`LocalitySummary`] for one locality's records.
///
/// `records` must be sorted ascending by year (as produced by
/// `Dataset::records_for`). Percent change is computed only when more
/// than one record exists and the first year's flat rate is non-zero;
/// otherwise it is zero and the trend reads stable.
///
/// Returns `None` for an empty slice.
#[must_use]
pub fn summarize(
    records: &[&TransactionRecord],
    options: AggregateOptions,
) -> Option<LocalitySummary> {
    let first = records.first()?;
    let last = records.last()?;

    let distinct_years: BTreeSet<i32> = records.iter().map(|r| r.year).collect();
    #[allow(clippy::cast_precision_loss)]
    let year_count = distinct_years.len() as f64;

    let total_sales_cr = records.iter().map(|r| r.total_sales).sum::<f64>() / CRORE;
    let total_units_raw = records.iter().map(|r| r.total_sold).sum::<f64>();
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let total_units = total_units_raw as u64;

    let rates: Vec<f64> = records.iter().map(|r| r.flat_rate).collect();
    let avg_flat_rate = average_rate(&rates, options.rate_averaging);

    let price_change_pct = if records.len() > 1 && first.flat_rate > 0.0 {
        (last.flat_rate - first.flat_rate) / first.flat_rate * 100.0
    } else {
        0.0
    };

    let mut summary = LocalitySummary {
        locality: first.locality.clone(),
        year_start: first.year,
        year_end: last.year,
        distinct_years: distinct_years.len(),
        total_sales_cr,
        avg_annual_sales_cr: total_sales_cr / year_count,
        total_units,
        avg_annual_units: total_units_raw / year_count,
        avg_flat_rate,
        latest_flat_rate: last.flat_rate,
        price_change_pct,
        trend: classify_trend(price_change_pct),
        narrative: String::new(),
    };
    summary.narrative = compose_narrative(&summary);

    Some(summary)
}

/// Extracts the compact stats payload the AI summarizer consumes.
#[must_use]
pub fn market_stats(summary: &LocalitySummary) -> MarketStats {
    MarketStats {
        area: summary.locality.clone(),
        year_range: YearRange {
            start: summary.year_start,
            end: summary.year_end,
        },
        sales_total: summary.total_sales_cr,
        avg_price: summary.avg_flat_rate,
        total_units: summary.total_units,
        price_trend: summary.trend,
        price_change: summary.price_change_pct,
    }
}

/// Composes the fixed multi-section narrative from computed values.
///
/// Deterministic for the same summary: no randomness, no external
/// calls.
fn compose_narrative(summary: &LocalitySummary) -> String {
    let divider = "=".repeat(60);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let avg_units = summary.avg_annual_units as u64;

    format!(
        "Real Estate Analysis: {locality}\n\
         {divider}\n\
         \n\
         Time Period: {years} ({count} years of data)\n\
         \n\
         FINANCIAL OVERVIEW:\n\
         - Total Sales Value: ₹{total_sales:.2} Crores\n\
         - Average Annual Sales: ₹{avg_sales:.2} Crores/year\n\
         - Market Activity: {activity}\n\
         \n\
         DEMAND METRICS:\n\
         - Total Units Sold: {units} units\n\
         - Average Annual Volume: {annual_units} units/year\n\
         \n\
         PRICE ANALYSIS (Residential Flats):\n\
         - Average Rate: ₹{avg_rate:.2} per sqft\n\
         - Price Trend: {trend} ({change:+.1}% change)\n\
         - Latest Rate: ₹{latest_rate:.2} per sqft\n\
         \n\
         MARKET INSIGHT:\n\
         {locality} shows {trend_lower} price trends with {demand} demand.\n\
         {tier}",
        locality = summary.locality,
        years = summary.year_range_label(),
        count = summary.distinct_years,
        total_sales = summary.total_sales_cr,
        avg_sales = summary.avg_annual_sales_cr,
        activity = summary.market_activity(),
        units = thousands(summary.total_units),
        annual_units = thousands(avg_units),
        avg_rate = summary.avg_flat_rate,
        trend = summary.trend.capitalized(),
        change = summary.price_change_pct,
        latest_rate = summary.latest_flat_rate,
        trend_lower = summary.trend,
        demand = summary.demand_strength(),
        tier = summary.price_tier_commentary(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(year: i32, total_sales: f64, total_sold: f64, flat_rate: f64) -> TransactionRecord {
        TransactionRecord {
            locality: "Wakad".to_string(),
            year,
            total_sales,
            total_sold,
            flat_rate,
            office_rate: 0.0,
            shop_rate: 0.0,
            carpet_area: 0.0,
        }
    }

    #[test]
    fn single_record_has_zero_change_and_stable_trend() {
        let rec = record(2020, 50_000_000.0, 100.0, 5000.0);
        let summary = summarize(&[&rec], AggregateOptions::default()).unwrap();
        assert!(summary.price_change_pct.abs() < f64::EPSILON);
        assert_eq!(summary.trend, PriceTrend::Stable);
        assert_eq!(summary.distinct_years, 1);
    }

    #[test]
    fn two_year_rise_classifies_increasing() {
        let a = record(2020, 50_000_000.0, 100.0, 5000.0);
        let b = record(2021, 60_000_000.0, 120.0, 5500.0);
        let summary = summarize(&[&a, &b], AggregateOptions::default()).unwrap();
        assert!((summary.price_change_pct - 10.0).abs() < 1e-9);
        assert_eq!(summary.trend, PriceTrend::Increasing);
        assert!((summary.avg_flat_rate - 5250.0).abs() < f64::EPSILON);
        assert_eq!(summary.year_start, 2020);
        assert_eq!(summary.year_end, 2021);
    }

    #[test]
    fn zero_first_rate_guards_percent_change() {
        let a = record(2020, 0.0, 0.0, 0.0);
        let b = record(2021, 0.0, 0.0, 5500.0);
        let summary = summarize(&[&a, &b], AggregateOptions::default()).unwrap();
        assert!(summary.price_change_pct.abs() < f64::EPSILON);
        assert_eq!(summary.trend, PriceTrend::Stable);
    }

    #[test]
    fn totals_scale_to_crores_and_average_over_distinct_years() {
        let a = record(2020, 50_000_000.0, 100.0, 5000.0);
        let b = record(2022, 150_000_000.0, 300.0, 5100.0);
        let summary = summarize(&[&a, &b], AggregateOptions::default()).unwrap();
        // Gap year 2021 is absent; averages divide by 2, not 3.
        assert!((summary.total_sales_cr - 20.0).abs() < f64::EPSILON);
        assert!((summary.avg_annual_sales_cr - 10.0).abs() < f64::EPSILON);
        assert_eq!(summary.total_units, 400);
        assert!((summary.avg_annual_units - 200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn exclude_zeros_policy_lifts_the_mean() {
        let a = record(2020, 0.0, 0.0, 0.0);
        let b = record(2021, 0.0, 0.0, 6000.0);
        let include = summarize(&[&a, &b], AggregateOptions::default()).unwrap();
        let exclude = summarize(
            &[&a, &b],
            AggregateOptions {
                rate_averaging: RateAveraging::ExcludeZeros,
            },
        )
        .unwrap();
        assert!((include.avg_flat_rate - 3000.0).abs() < f64::EPSILON);
        assert!((exclude.avg_flat_rate - 6000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn narrative_interpolates_computed_values() {
        let a = record(2020, 50_000_000.0, 100.0, 5000.0);
        let b = record(2021, 60_000_000.0, 1200.0, 5500.0);
        let summary = summarize(&[&a, &b], AggregateOptions::default()).unwrap();
        assert!(summary.narrative.contains("Real Estate Analysis: Wakad"));
        assert!(summary.narrative.contains("2020-2021 (2 years of data)"));
        assert!(summary.narrative.contains("Increasing (+10.0% change)"));
        assert!(summary.narrative.contains("Total Units Sold: 1,300 units"));
    }

    #[test]
    fn market_stats_mirror_the_summary() {
        let a = record(2020, 50_000_000.0, 100.0, 5000.0);
        let b = record(2021, 60_000_000.0, 120.0, 5500.0);
        let summary = summarize(&[&a, &b], AggregateOptions::default()).unwrap();
        let stats = market_stats(&summary);
        assert_eq!(stats.area, "Wakad");
        assert_eq!(stats.year_range.start, 2020);
        assert_eq!(stats.year_range.end, 2021);
        assert_eq!(stats.price_trend, PriceTrend::Increasing);
        assert_eq!(stats.total_units, 220);
    }

    #[test]
    fn empty_slice_yields_none() {
        assert!(summarize(&[], AggregateOptions::default()).is_none());
    }
}
