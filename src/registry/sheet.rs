//! Master-sheet CSV source
//!
//! The master sheet is a spreadsheet export with positional columns: row id,
//! name, NIK, income, dependents, occupation. Fields the sheet does not carry
//! (gender, dwelling, health, year) are defaulted the way the registration
//! form defaults them. Rows that cannot produce a profile are counted and
//! warn-logged, never fatal: one bad row must not abort a sync.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use log::{debug, warn};

use crate::config::SheetConfig;
use crate::error::Result;
use crate::models::HouseholdProfile;

const COL_NAME: usize = 1;
const COL_NIK: usize = 2;
const COL_INCOME: usize = 3;
const COL_DEPENDENTS: usize = 4;
const COL_OCCUPATION: usize = 5;

/// Minimum number of columns a usable row carries
const MIN_COLUMNS: usize = 5;

/// Parsed sheet rows plus the count of rows that failed to parse
#[derive(Debug, Clone)]
pub struct SheetBatch {
    /// Profiles ready for import
    pub profiles: Vec<HouseholdProfile>,
    /// Rows skipped because they were too short or missing identity fields
    pub malformed: usize,
}

/// Read master-sheet rows from any reader
pub fn read_sheet<R: Read>(reader: R, config: &SheetConfig) -> Result<SheetBatch> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(config.has_header)
        .delimiter(config.delimiter)
        .flexible(true)
        .from_reader(reader);

    let mut profiles = Vec::new();
    let mut malformed = 0;
    for (row, record) in csv_reader.records().enumerate() {
        let record = record?;
        match parse_row(&record, config.year) {
            Some(profile) => profiles.push(profile),
            None => {
                malformed += 1;
                warn!(
                    "skipping malformed sheet row {}",
                    row + 1 + usize::from(config.has_header)
                );
            }
        }
    }
    debug!(
        "parsed {} sheet rows, {} malformed",
        profiles.len(),
        malformed
    );
    Ok(SheetBatch { profiles, malformed })
}

/// Read master-sheet rows from a CSV file
pub fn read_sheet_file(path: impl AsRef<Path>, config: &SheetConfig) -> Result<SheetBatch> {
    let path = path.as_ref();
    debug!("reading master sheet from {}", path.display());
    let file = File::open(path)?;
    read_sheet(file, config)
}

/// Map one sheet row onto a profile, or `None` if the row is unusable
fn parse_row(record: &StringRecord, year: i32) -> Option<HouseholdProfile> {
    if record.len() < MIN_COLUMNS {
        return None;
    }
    let name = clean_text(record.get(COL_NAME)?);
    // sheets prefix the NIK with an apostrophe to keep it textual
    let nik = clean_text(record.get(COL_NIK)?).replace('\'', "");
    if name.is_empty() || nik.is_empty() {
        return None;
    }
    HouseholdProfile::builder(name, nik)
        .income(parse_amount(record.get(COL_INCOME).unwrap_or("")))
        .dependents(parse_count(record.get(COL_DEPENDENTS).unwrap_or("")))
        .occupation(clean_text(record.get(COL_OCCUPATION).unwrap_or("")))
        .year(year)
        .build()
        .ok()
}

/// Trim a field and strip stray surrounding quotes left by re-exported sheets
fn clean_text(field: &str) -> String {
    field.trim().trim_matches('"').trim().to_string()
}

/// Extract the digits of a monetary field, defaulting to 0
fn parse_amount(field: &str) -> u64 {
    let digits: String = field.chars().filter(char::is_ascii_digit).collect();
    digits.parse().unwrap_or(0)
}

/// Extract the digits of a count field, defaulting to 0
fn parse_count(field: &str) -> u32 {
    let digits: String = field.chars().filter(char::is_ascii_digit).collect();
    digits.parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_keep_digits_only() {
        assert_eq!(parse_amount("Rp 1.200.000"), 1_200_000);
        assert_eq!(parse_amount("850000"), 850_000);
        assert_eq!(parse_amount(""), 0);
        assert_eq!(parse_amount("n/a"), 0);
    }

    #[test]
    fn text_fields_lose_stray_quotes() {
        assert_eq!(clean_text("  \"Ahmad Subagyo\"  "), "Ahmad Subagyo");
        assert_eq!(clean_text("Pedagang"), "Pedagang");
    }

    #[test]
    fn short_rows_are_rejected() {
        let record = StringRecord::from(vec!["1", "Ahmad", "33210001"]);
        assert!(parse_row(&record, 2026).is_none());
    }

    #[test]
    fn nik_apostrophes_are_dropped() {
        let record =
            StringRecord::from(vec!["1", "Ahmad", "'33210001", "500000", "4", "Buruh Tani"]);
        let profile = parse_row(&record, 2026).unwrap();
        assert_eq!(profile.nik, "33210001");
        assert_eq!(profile.income, 500_000);
        assert_eq!(profile.dependents, 4);
        assert_eq!(profile.occupation, "Buruh Tani");
    }
}
