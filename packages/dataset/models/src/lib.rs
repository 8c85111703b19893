#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Transaction record and dataset types.
//!
//! A [`TransactionRecord`] is one locality-year row of the source file;
//! a [`Dataset`] is the ordered collection of all rows plus the
//! deduplicated locality list. Both are read-only snapshots; the dataset
//! is rebuilt from the backing file on every request and never mutated.

use serde::{Deserialize, Serialize};

/// Aggregated sales figures for one locality in one year.
///
/// Numeric fields are zero when the source cell was missing or
/// unparseable, never null. Locality and year are guaranteed present by
/// the loader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Locality name, trimmed, in the casing stored in the source file.
    pub locality: String,
    /// Transaction year.
    pub year: i32,
    /// Total sales value in base currency units (rupees).
    pub total_sales: f64,
    /// Total number of units sold.
    pub total_sold: f64,
    /// Weighted-average rate per sqft for flats.
    pub flat_rate: f64,
    /// Weighted-average rate per sqft for offices.
    pub office_rate: f64,
    /// Weighted-average rate per sqft for shops.
    pub shop_rate: f64,
    /// Total carpet area supplied, in sqft.
    pub carpet_area: f64,
}

/// An in-memory snapshot of the transaction table.
///
/// Locality identity is the name string itself: lookups compare
/// case-insensitively, but the canonical stored casing is what callers
/// get back.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<TransactionRecord>,
    localities: Vec<String>,
}

impl Dataset {
    /// Builds a dataset from loaded records, deduplicating the locality
    /// list case-insensitively in first-appearance order.
    #[must_use]
    pub fn new(records: Vec<TransactionRecord>) -> Self {
        let mut localities: Vec<String> = Vec::new();
        let mut seen: std::collections::HashSet<String> = std::collections::HashSet::new();

        for record in &records {
            let key = record.locality.to_lowercase();
            if seen.insert(key) {
                localities.push(record.locality.clone());
            }
        }

        Self {
            records,
            localities,
        }
    }

    /// All records, in source order.
    #[must_use]
    pub fn records(&self) -> &[TransactionRecord] {
        &self.records
    }

    /// Distinct locality names in first-appearance order, canonical
    /// stored casing.
    #[must_use]
    pub fn localities(&self) -> &[String] {
        &self.localities
    }

    /// Number of records in the snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// `true` when the snapshot holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records for one locality (case-insensitive match), sorted
    /// ascending by year.
    #[must_use]
    pub fn records_for(&self, locality: &str) -> Vec<&TransactionRecord> {
        let wanted = locality.to_lowercase();
        let mut matches: Vec<&TransactionRecord> = self
            .records
            .iter()
            .filter(|r| r.locality.to_lowercase() == wanted)
            .collect();
        matches.sort_by_key(|r| r.year);
        matches
    }

    /// Min and max year across the whole dataset, or `None` when empty.
    #[must_use]
    pub fn year_range(&self) -> Option<(i32, i32)> {
        let min = self.records.iter().map(|r| r.year).min()?;
        let max = self.records.iter().map(|r| r.year).max()?;
        Some((min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(locality: &str, year: i32) -> TransactionRecord {
        TransactionRecord {
            locality: locality.to_string(),
            year,
            total_sales: 0.0,
            total_sold: 0.0,
            flat_rate: 0.0,
            office_rate: 0.0,
            shop_rate: 0.0,
            carpet_area: 0.0,
        }
    }

    #[test]
    fn localities_dedupe_case_insensitively_keeping_first_casing() {
        let dataset = Dataset::new(vec![
            record("Wakad", 2020),
            record("WAKAD", 2021),
            record("Baner", 2020),
        ]);
        assert_eq!(dataset.localities(), ["Wakad", "Baner"]);
    }

    #[test]
    fn records_for_matches_case_insensitively_and_sorts_ascending() {
        let dataset = Dataset::new(vec![
            record("Wakad", 2022),
            record("Baner", 2020),
            record("wakad", 2020),
        ]);
        let years: Vec<i32> = dataset.records_for("WaKaD").iter().map(|r| r.year).collect();
        assert_eq!(years, [2020, 2022]);
    }

    #[test]
    fn year_range_spans_all_records() {
        let dataset = Dataset::new(vec![record("Wakad", 2019), record("Baner", 2023)]);
        assert_eq!(dataset.year_range(), Some((2019, 2023)));
    }

    #[test]
    fn empty_dataset_has_no_year_range() {
        assert_eq!(Dataset::new(Vec::new()).year_range(), None);
    }
}
