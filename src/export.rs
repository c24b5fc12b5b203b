//! CSV output for scraped listings

use crate::error::Result;
use crate::listing::ListingRecord;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

/// Write records to a CSV file with a header row
///
/// Unset fields are written as empty cells. An empty batch writes nothing and
/// returns 0.
pub fn save_to_csv(records: &[ListingRecord], path: impl AsRef<Path>) -> Result<usize> {
    let path = path.as_ref();

    if records.is_empty() {
        log::info!("No properties to save");
        return Ok(0);
    }

    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    log::info!("Data saved to {}", path.display());
    Ok(records.len())
}

/// Default output file name for a zip code scraped on `date`
pub fn default_output_path(zip_code: &str, date: NaiveDate) -> PathBuf {
    PathBuf::from(format!("real_estate_data_{}_{}.csv", zip_code.trim(), date.format("%Y%m%d")))
}
