//! CSV export of filtered records for the download endpoint.

use estate_insights_dataset_models::TransactionRecord;

/// Serializes records to CSV bytes with the canonical column headers.
///
/// The output re-parses through the dataset loader, so a downloaded
/// file can be fed back in as a backing file.
///
/// # Errors
///
/// Returns [`csv::Error`] if serialization fails.
pub fn records_to_csv(records: &[&TransactionRecord]) -> Result<Vec<u8>, csv::Error> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for record in records {
        writer.serialize(record)?;
    }
    Ok(writer.into_inner().map_err(csv::IntoInnerError::into_error)?)
}
