//! Registry statistics and summaries
//!
//! Aggregate views over the stored records: status counts for the monitoring
//! dashboard, an occupation breakdown, and a plain-text summary report.

use itertools::Itertools;
use serde::Serialize;

use crate::models::{Household, PovertyStatus};

/// Status counts over the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RegistryStats {
    /// Number of stored records
    pub total: usize,
    /// Records classified "Miskin"
    pub poor: usize,
    /// Records classified "Rentan Miskin"
    pub near_poor: usize,
    /// Records classified "Tidak Miskin"
    pub not_poor: usize,
}

impl RegistryStats {
    /// Calculate status counts for a set of records
    #[must_use]
    pub fn from_records(records: &[Household]) -> Self {
        let mut stats = Self {
            total: records.len(),
            poor: 0,
            near_poor: 0,
            not_poor: 0,
        };
        for record in records {
            match record.status {
                PovertyStatus::Poor => stats.poor += 1,
                PovertyStatus::NearPoor => stats.near_poor += 1,
                PovertyStatus::NotPoor => stats.not_poor += 1,
            }
        }
        stats
    }

    /// Generate a plain-text summary report
    #[must_use]
    pub fn summary(&self) -> String {
        let mut summary = String::new();
        summary.push_str("Ringkasan Registri Warga:\n");
        summary.push_str(&format!("  Total Data Warga: {}\n", self.total));
        summary.push_str(&format!("  Prediksi Miskin: {}\n", self.poor));
        summary.push_str(&format!("  Prediksi Rentan: {}\n", self.near_poor));
        summary.push_str(&format!("  Prediksi Aman: {}\n", self.not_poor));
        summary
    }
}

/// Occupation label distribution, most common first
///
/// Records without an occupation label are skipped; ties break on the label
/// so the ordering is stable.
#[must_use]
pub fn occupation_breakdown(records: &[Household]) -> Vec<(String, usize)> {
    records
        .iter()
        .filter(|record| !record.profile.occupation.is_empty())
        .map(|record| record.profile.occupation.clone())
        .counts()
        .into_iter()
        .sorted_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)))
        .collect()
}
