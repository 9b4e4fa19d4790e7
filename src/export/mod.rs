//! CSV export of registered households
//!
//! Serializes stored records, including the classification attached at
//! registration time, to the column layout operators expect from the
//! dashboard export. Accepts any record iterator so a filtered query result
//! exports the same way as the whole registry. The classifier is never
//! invoked here.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use chrono::Local;
use log::{info, warn};

use crate::error::Result;
use crate::models::Household;

/// Header row of the export
const HEADERS: [&str; 12] = [
    "ID",
    "Nama",
    "NIK",
    "Gender",
    "Tahun",
    "Penghasilan",
    "Tanggungan",
    "Pekerjaan",
    "Tipe Rumah",
    "Tipe Lantai",
    "Status AI",
    "Alasan",
];

/// Write records as CSV to any writer
pub fn write_csv<'a, I, W>(records: I, writer: W) -> Result<()>
where
    I: IntoIterator<Item = &'a Household>,
    W: Write,
{
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(HEADERS)?;
    let mut written = 0usize;
    for record in records {
        let profile = &record.profile;
        csv_writer.write_record([
            record.id.clone(),
            profile.name.clone(),
            // leading apostrophe keeps the NIK textual in spreadsheet apps
            format!("'{}", profile.nik),
            profile.gender.to_string(),
            profile.year.to_string(),
            profile.income.to_string(),
            profile.dependents.to_string(),
            profile.occupation.clone(),
            profile.house_type.to_string(),
            profile.floor_type.to_string(),
            record.status.to_string(),
            record.reason.clone(),
        ])?;
        written += 1;
    }
    if written == 0 {
        warn!("exported an empty record set");
    }
    csv_writer.flush()?;
    Ok(())
}

/// Export records to a CSV file
pub fn export_file<'a, I>(records: I, path: impl AsRef<Path>) -> Result<()>
where
    I: IntoIterator<Item = &'a Household>,
{
    let path = path.as_ref();
    info!("exporting records to {}", path.display());
    let file = File::create(path)?;
    write_csv(records, file)
}

/// Default export file name, stamped with the local date
#[must_use]
pub fn default_export_name() -> String {
    format!("DATA_WIRATAN_{}.csv", Local::now().format("%Y-%m-%d"))
}
