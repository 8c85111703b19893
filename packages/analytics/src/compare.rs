//! Side-by-side comparison of multiple localities.

use estate_insights_analytics_models::{
    AggregateOptions, ComparisonEntry, ComparisonOutcome,
};
use estate_insights_dataset_models::Dataset;

use crate::metrics::average_rate;
use crate::series::to_chart_series;
use crate::CRORE;

/// Computes comparison figures for each requested locality
/// independently.
///
/// The caller enforces the two-locality minimum; this function maps
/// whatever it is given. A locality with no matching records produces
/// an explicit [`ComparisonOutcome::NoData`] entry instead of being
/// silently dropped.
#[must_use]
pub fn compare(
    localities: &[&str],
    dataset: &Dataset,
    options: AggregateOptions,
) -> Vec<ComparisonOutcome> {
    localities
        .iter()
        .map(|area| {
            let records = dataset.records_for(area);
            if records.is_empty() {
                return ComparisonOutcome::NoData {
                    area: (*area).to_string(),
                    error: format!("No records found for {area}"),
                };
            }

            let rates: Vec<f64> = records.iter().map(|r| r.flat_rate).collect();
            let total_units_raw = records.iter().map(|r| r.total_sold).sum::<f64>();
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let total_units_sold = total_units_raw as u64;

            ComparisonOutcome::Data(ComparisonEntry {
                area: records[0].locality.clone(),
                avg_flat_rate: average_rate(&rates, options.rate_averaging),
                total_sales: records.iter().map(|r| r.total_sales).sum::<f64>() / CRORE,
                total_units_sold,
                chart_data: to_chart_series(&records),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use estate_insights_dataset_models::TransactionRecord;

    fn record(locality: &str, year: i32, flat_rate: f64) -> TransactionRecord {
        TransactionRecord {
            locality: locality.to_string(),
            year,
            total_sales: 50_000_000.0,
            total_sold: 100.0,
            flat_rate,
            office_rate: 0.0,
            shop_rate: 0.0,
            carpet_area: 0.0,
        }
    }

    #[test]
    fn compares_each_locality_independently() {
        let dataset = Dataset::new(vec![
            record("Wakad", 2020, 5000.0),
            record("Wakad", 2021, 5500.0),
            record("Baner", 2020, 8000.0),
        ]);
        let outcomes = compare(&["Wakad", "Baner"], &dataset, AggregateOptions::default());
        assert_eq!(outcomes.len(), 2);

        let ComparisonOutcome::Data(wakad) = &outcomes[0] else {
            panic!("expected data for Wakad");
        };
        assert_eq!(wakad.area, "Wakad");
        assert!((wakad.avg_flat_rate - 5250.0).abs() < f64::EPSILON);
        assert!((wakad.total_sales - 10.0).abs() < f64::EPSILON);
        assert_eq!(wakad.total_units_sold, 200);
        assert_eq!(wakad.chart_data.len(), 2);
    }

    #[test]
    fn missing_locality_yields_explicit_no_data_entry() {
        let dataset = Dataset::new(vec![record("Wakad", 2020, 5000.0)]);
        let outcomes = compare(&["Wakad", "Hinjewadi"], &dataset, AggregateOptions::default());
        assert!(matches!(outcomes[0], ComparisonOutcome::Data(_)));
        let ComparisonOutcome::NoData { area, error } = &outcomes[1] else {
            panic!("expected no-data entry");
        };
        assert_eq!(area, "Hinjewadi");
        assert!(error.contains("Hinjewadi"));
    }
}
