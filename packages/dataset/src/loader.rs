//! Reads the transaction table from CSV into a [`Dataset`].

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use estate_insights_dataset_models::{Dataset, TransactionRecord};

use crate::columns::Column;
use crate::parsing::{parse_numeric, parse_year};
use crate::DatasetError;

/// Loads the dataset from the backing file at `path`.
///
/// Logs the record and locality counts on success.
///
/// # Errors
///
/// Returns [`DatasetError::SourceUnavailable`] when the file is missing
/// or unreadable, or [`DatasetError::Malformed`] when the header row
/// cannot be parsed.
pub fn load(path: &Path) -> Result<Dataset, DatasetError> {
    let file = File::open(path).map_err(|source| DatasetError::SourceUnavailable {
        path: path.display().to_string(),
        source,
    })?;

    let dataset = load_from_reader(file)?;
    log::info!(
        "Loaded {} records from {} localities ({})",
        dataset.len(),
        dataset.localities().len(),
        path.display()
    );
    Ok(dataset)
}

/// Loads the dataset from any CSV reader.
///
/// Header spellings are normalized via [`Column::from_header`]; rows
/// without a locality or a parseable year are skipped; numeric cells
/// coerce to zero on failure.
///
/// # Errors
///
/// Returns [`DatasetError::Malformed`] when the header row cannot be
/// parsed.
pub fn load_from_reader<R: Read>(reader: R) -> Result<Dataset, DatasetError> {
    let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

    let columns: HashMap<Column, usize> = csv_reader
        .headers()?
        .iter()
        .enumerate()
        .filter_map(|(idx, header)| Column::from_header(header).map(|col| (col, idx)))
        .collect();

    let mut records = Vec::new();
    let mut skipped = 0usize;

    for row in csv_reader.records() {
        let Ok(row) = row else {
            skipped += 1;
            continue;
        };

        let cell = |column: Column| columns.get(&column).and_then(|&idx| row.get(idx));

        let Some(locality) = cell(Column::Locality).map(str::trim).filter(|s| !s.is_empty())
        else {
            skipped += 1;
            continue;
        };

        let Some(year) = cell(Column::Year).and_then(parse_year) else {
            skipped += 1;
            continue;
        };

        let numeric = |column: Column| cell(column).map(parse_numeric).unwrap_or_default();

        records.push(TransactionRecord {
            locality: locality.to_string(),
            year,
            total_sales: numeric(Column::TotalSales),
            total_sold: numeric(Column::TotalSold),
            flat_rate: numeric(Column::FlatRate),
            office_rate: numeric(Column::OfficeRate),
            shop_rate: numeric(Column::ShopRate),
            carpet_area: numeric(Column::CarpetArea),
        });
    }

    if skipped > 0 {
        log::debug!("Skipped {skipped} rows with missing locality or year");
    }

    Ok(Dataset::new(records))
}
