//! In-memory household store
//!
//! The store owns the session's registered households. Records enter through
//! `register` (single entry) or `import` (bulk sheet rows); both classify the
//! profile exactly once and attach the result, after which the record is
//! immutable until removed. The store itself is handed by reference to
//! whatever needs it; the classification rules never see it.

pub mod statistics;

use log::info;
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use serde::Serialize;
use uuid::Uuid;

use crate::algorithm::classify;
use crate::models::{Household, HouseholdProfile, PovertyStatus};
use crate::registry::sheet::SheetBatch;
use statistics::RegistryStats;

/// Owned collection of registered households
#[derive(Debug, Default)]
pub struct HouseholdStore {
    records: Vec<Household>,
}

impl HouseholdStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify a profile and add it to the store
    ///
    /// The classification runs once, here; the stored record keeps its status
    /// and reason for the rest of the session.
    pub fn register(&mut self, profile: HouseholdProfile) -> &Household {
        let outcome = classify(&profile);
        let record = Household::new(
            Uuid::new_v4().to_string(),
            profile,
            outcome.status,
            outcome.reason,
        );
        let idx = self.records.len();
        self.records.push(record);
        &self.records[idx]
    }

    /// Remove a record by id, returning it if present
    pub fn remove(&mut self, id: &str) -> Option<Household> {
        let idx = self.records.iter().position(|record| record.id == id)?;
        Some(self.records.remove(idx))
    }

    /// Look up a record by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Household> {
        self.records.iter().find(|record| record.id == id)
    }

    /// All stored records, in registration order
    #[must_use]
    pub fn records(&self) -> &[Household] {
        &self.records
    }

    /// Number of stored records
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether a record with the same identity already exists for the year
    ///
    /// A duplicate shares the NIK or the case-insensitive name, within the
    /// same assessment year.
    #[must_use]
    pub fn contains_identity(&self, nik: &str, name: &str, year: i32) -> bool {
        let name = name.to_lowercase();
        self.records.iter().any(|record| {
            record.profile.year == year
                && (record.profile.nik == nik || record.profile.name.to_lowercase() == name)
        })
    }

    /// Import a batch of sheet rows
    ///
    /// Rows duplicating an existing record, or an earlier row of the same
    /// batch, are counted and skipped. Classification of the accepted rows is
    /// a map of a pure function over independent inputs, so it fans out
    /// across threads.
    pub fn import(&mut self, batch: SheetBatch) -> ImportSummary {
        let mut seen_niks: FxHashSet<(String, i32)> = self
            .records
            .iter()
            .map(|record| (record.profile.nik.clone(), record.profile.year))
            .collect();
        let mut seen_names: FxHashSet<(String, i32)> = self
            .records
            .iter()
            .map(|record| (record.profile.name.to_lowercase(), record.profile.year))
            .collect();

        let mut accepted = Vec::new();
        let mut duplicates = 0;
        for profile in batch.profiles {
            let nik_key = (profile.nik.clone(), profile.year);
            let name_key = (profile.name.to_lowercase(), profile.year);
            if seen_niks.contains(&nik_key) || seen_names.contains(&name_key) {
                duplicates += 1;
                continue;
            }
            seen_niks.insert(nik_key);
            seen_names.insert(name_key);
            accepted.push(profile);
        }

        let classified: Vec<_> = accepted
            .into_par_iter()
            .map(|profile| {
                let outcome = classify(&profile);
                (profile, outcome)
            })
            .collect();

        let added = classified.len();
        for (profile, outcome) in classified {
            self.records.push(Household::new(
                Uuid::new_v4().to_string(),
                profile,
                outcome.status,
                outcome.reason,
            ));
        }

        let summary = ImportSummary {
            added,
            duplicates,
            malformed: batch.malformed,
        };
        info!("sheet import finished: {}", summary.report());
        summary
    }

    /// Records matching a query, in registration order
    #[must_use]
    pub fn query(&self, query: &HouseholdQuery) -> Vec<&Household> {
        self.records
            .iter()
            .filter(|record| query.matches(record))
            .collect()
    }

    /// Status counts over the stored records
    #[must_use]
    pub fn stats(&self) -> RegistryStats {
        RegistryStats::from_records(&self.records)
    }
}

/// Counts reported after a bulk import
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    /// Rows registered
    pub added: usize,
    /// Rows skipped as duplicates of an existing identity/year
    pub duplicates: usize,
    /// Rows that could not be parsed into a profile
    pub malformed: usize,
}

impl ImportSummary {
    /// The sync report line shown to operators
    #[must_use]
    pub fn report(&self) -> String {
        format!(
            "Berhasil: {} | Duplikat: {} | Bermasalah: {}",
            self.added, self.duplicates, self.malformed
        )
    }
}

/// Filter over stored records
///
/// Empty fields match everything, so `HouseholdQuery::default()` returns the
/// whole registry.
#[derive(Debug, Clone, Default)]
pub struct HouseholdQuery {
    /// Term matched case-insensitively against the name, or as a substring of
    /// the NIK
    pub search: Option<String>,
    /// Restrict to one poverty status
    pub status: Option<PovertyStatus>,
    /// Restrict to one assessment year
    pub year: Option<i32>,
}

impl HouseholdQuery {
    /// Query matching every record
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search term
    #[must_use]
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Restrict to one poverty status
    #[must_use]
    pub fn status(mut self, status: PovertyStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Restrict to one assessment year
    #[must_use]
    pub fn year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    fn matches(&self, record: &Household) -> bool {
        let search_ok = match &self.search {
            Some(term) if !term.trim().is_empty() => {
                let term = term.trim();
                record
                    .profile
                    .name
                    .to_lowercase()
                    .contains(&term.to_lowercase())
                    || record.profile.nik.contains(term)
            }
            _ => true,
        };
        search_ok
            && self.status.map_or(true, |status| record.status == status)
            && self.year.map_or(true, |year| record.profile.year == year)
    }
}
