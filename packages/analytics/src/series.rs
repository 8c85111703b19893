//! Shapes filtered records into chart series and display table rows.

use estate_insights_analytics_models::{ChartPoint, TableRow};
use estate_insights_dataset_models::TransactionRecord;

use crate::fmt::{round2, thousands};
use crate::CRORE;

fn positive(value: f64) -> Option<f64> {
    (value > 0.0).then_some(value)
}

/// Converts records into a chart series, one point per record, sorted
/// ascending by year.
///
/// Optional rate fields are decided per point: a mixed series where
/// only some years carry an office or shop rate is expected.
#[must_use]
pub fn to_chart_series(records: &[&TransactionRecord]) -> Vec<ChartPoint> {
    let mut sorted: Vec<&TransactionRecord> = records.to_vec();
    sorted.sort_by_key(|r| r.year);

    sorted
        .iter()
        .map(|r| {
            #[allow(clippy::cast_possible_truncation)]
            let total_sold = r.total_sold as i64;
            ChartPoint {
                year: r.year,
                total_sales: round2(r.total_sales / CRORE),
                total_sold,
                flat_rate: positive(r.flat_rate).map(round2),
                office_rate: positive(r.office_rate).map(round2),
                shop_rate: positive(r.shop_rate).map(round2),
                carpet_area: positive(r.carpet_area).map(round2),
            }
        })
        .collect()
}

/// Converts records into display table rows, sorted descending by year.
///
/// Values are formatted strings for direct rendering or export, not
/// further computation.
#[must_use]
pub fn to_table(records: &[&TransactionRecord]) -> Vec<TableRow> {
    let mut sorted: Vec<&TransactionRecord> = records.to_vec();
    sorted.sort_by_key(|r| std::cmp::Reverse(r.year));

    sorted
        .iter()
        .map(|r| {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let units = r.total_sold as u64;
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let carpet = r.carpet_area.round() as u64;
            TableRow {
                year: r.year,
                area: r.locality.clone(),
                total_sales: format!("{:.2}", r.total_sales / CRORE),
                units_sold: thousands(units),
                flat_rate: format!("{:.2}", r.flat_rate),
                carpet_area: positive(r.carpet_area).map(|_| thousands(carpet)),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(year: i32, flat_rate: f64, office_rate: f64, carpet_area: f64) -> TransactionRecord {
        TransactionRecord {
            locality: "Wakad".to_string(),
            year,
            total_sales: 123_456_789.0,
            total_sold: 1500.0,
            flat_rate,
            office_rate,
            shop_rate: 0.0,
            carpet_area,
        }
    }

    #[test]
    fn chart_is_ascending_and_table_descending_for_same_input() {
        let a = record(2022, 5000.0, 0.0, 0.0);
        let b = record(2020, 4800.0, 0.0, 0.0);
        let c = record(2021, 4900.0, 0.0, 0.0);
        let records = vec![&a, &b, &c];

        let chart_years: Vec<i32> = to_chart_series(&records).iter().map(|p| p.year).collect();
        let table_years: Vec<i32> = to_table(&records).iter().map(|r| r.year).collect();
        assert_eq!(chart_years, [2020, 2021, 2022]);
        assert_eq!(table_years, [2022, 2021, 2020]);
    }

    #[test]
    fn sales_scale_to_crores_with_two_decimals() {
        let a = record(2020, 5000.0, 0.0, 0.0);
        let points = to_chart_series(&[&a]);
        assert!((points[0].total_sales - 12.35).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_flat_rate_is_null_and_zero_office_rate_is_absent() {
        let a = record(2020, 0.0, 0.0, 0.0);
        let b = record(2021, 5000.0, 9500.0, 0.0);
        let points = to_chart_series(&[&a, &b]);
        assert_eq!(points[0].flat_rate, None);
        assert_eq!(points[0].office_rate, None);
        assert_eq!(points[1].flat_rate, Some(5000.0));
        assert_eq!(points[1].office_rate, Some(9500.0));
    }

    #[test]
    fn chart_rounding_is_idempotent_through_reserialization() {
        let a = record(2020, 5123.456, 0.0, 0.0);
        let first = to_chart_series(&[&a]);
        let reparsed: Vec<ChartPoint> =
            serde_json::from_str(&serde_json::to_string(&first).unwrap()).unwrap();
        assert_eq!(first, reparsed);
    }

    #[test]
    fn table_formats_display_strings() {
        let a = record(2020, 5000.5, 0.0, 25_000.4);
        let rows = to_table(&[&a]);
        assert_eq!(rows[0].total_sales, "12.35");
        assert_eq!(rows[0].units_sold, "1,500");
        assert_eq!(rows[0].flat_rate, "5000.50");
        assert_eq!(rows[0].carpet_area.as_deref(), Some("25,000"));
    }

    #[test]
    fn zero_carpet_area_is_absent_from_table_rows() {
        let a = record(2020, 5000.0, 0.0, 0.0);
        assert_eq!(to_table(&[&a])[0].carpet_area, None);
    }
}
