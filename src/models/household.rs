//! Household profile and stored record models
//!
//! A `HouseholdProfile` carries the attributes collected for one family unit
//! in a given assessment year. Profiles are built through `HouseholdBuilder`,
//! which rejects records without a usable name or NIK before they can reach
//! the classification rules. A `Household` is a profile after registration:
//! it carries the generated id and the classification attached at creation
//! time, and is never re-classified.

use serde::{Deserialize, Serialize};

use super::types::{FloorType, Gender, HouseType, PovertyStatus};
use crate::config::DEFAULT_ASSESSMENT_YEAR;
use crate::error::{Result, WiratanError};

/// Attributes describing one family unit's economic and housing situation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseholdProfile {
    /// Name of the head of household
    pub name: String,
    /// National identity number, used for duplicate detection
    pub nik: String,
    /// Gender of the head of household
    pub gender: Gender,
    /// Monthly income in rupiah
    pub income: u64,
    /// Number of family members financially dependent on the earner
    pub dependents: u32,
    /// Wall construction of the dwelling
    pub house_type: HouseType,
    /// Floor material of the dwelling
    pub floor_type: FloorType,
    /// Occupation label, display-only
    pub occupation: String,
    /// Whether a household member has a chronic health condition
    pub health_issues: bool,
    /// Assessment year this profile pertains to
    pub year: i32,
}

impl HouseholdProfile {
    /// Start building a profile for the given name and NIK
    #[must_use]
    pub fn builder(name: impl Into<String>, nik: impl Into<String>) -> HouseholdBuilder {
        HouseholdBuilder::new(name, nik)
    }
}

/// Builder for `HouseholdProfile`
///
/// Defaults mirror the registration form: male head of household, permanent
/// house with tiled floor, no income, no dependents, no health issues, and
/// the default assessment year.
#[derive(Debug, Clone)]
pub struct HouseholdBuilder {
    name: String,
    nik: String,
    gender: Gender,
    income: u64,
    dependents: u32,
    house_type: HouseType,
    floor_type: FloorType,
    occupation: String,
    health_issues: bool,
    year: i32,
}

impl HouseholdBuilder {
    /// Create a builder with form defaults
    #[must_use]
    pub fn new(name: impl Into<String>, nik: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nik: nik.into(),
            gender: Gender::Male,
            income: 0,
            dependents: 0,
            house_type: HouseType::Permanent,
            floor_type: FloorType::Tiled,
            occupation: String::new(),
            health_issues: false,
            year: DEFAULT_ASSESSMENT_YEAR,
        }
    }

    /// Set the gender of the head of household
    #[must_use]
    pub fn gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    /// Set the monthly income in rupiah
    #[must_use]
    pub fn income(mut self, income: u64) -> Self {
        self.income = income;
        self
    }

    /// Set the number of dependents
    #[must_use]
    pub fn dependents(mut self, dependents: u32) -> Self {
        self.dependents = dependents;
        self
    }

    /// Set the wall construction of the dwelling
    #[must_use]
    pub fn house_type(mut self, house_type: HouseType) -> Self {
        self.house_type = house_type;
        self
    }

    /// Set the floor material of the dwelling
    #[must_use]
    pub fn floor_type(mut self, floor_type: FloorType) -> Self {
        self.floor_type = floor_type;
        self
    }

    /// Set the occupation label
    #[must_use]
    pub fn occupation(mut self, occupation: impl Into<String>) -> Self {
        self.occupation = occupation.into();
        self
    }

    /// Set whether the household has a chronic health condition
    #[must_use]
    pub fn health_issues(mut self, health_issues: bool) -> Self {
        self.health_issues = health_issues;
        self
    }

    /// Set the assessment year
    #[must_use]
    pub fn year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    /// Validate and produce the profile
    ///
    /// Rejects records whose name or NIK is empty after trimming; everything
    /// else has a usable default.
    pub fn build(self) -> Result<HouseholdProfile> {
        let name = self.name.trim().to_string();
        let nik = self.nik.trim().to_string();
        if name.is_empty() {
            return Err(WiratanError::InvalidRecord("name must not be empty".into()));
        }
        if nik.is_empty() {
            return Err(WiratanError::InvalidRecord("NIK must not be empty".into()));
        }
        Ok(HouseholdProfile {
            name,
            nik,
            gender: self.gender,
            income: self.income,
            dependents: self.dependents,
            house_type: self.house_type,
            floor_type: self.floor_type,
            occupation: self.occupation.trim().to_string(),
            health_issues: self.health_issues,
            year: self.year,
        })
    }
}

/// A registered household: profile plus the classification attached at
/// creation time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Household {
    /// Opaque record identifier
    pub id: String,
    /// The profile as submitted
    #[serde(flatten)]
    pub profile: HouseholdProfile,
    /// Assigned poverty status
    pub status: PovertyStatus,
    /// Sentence explaining which conditions produced the status
    pub reason: String,
}

impl Household {
    /// Attach a classification outcome to a profile
    #[must_use]
    pub fn new(id: String, profile: HouseholdProfile, status: PovertyStatus, reason: String) -> Self {
        Self {
            id,
            profile,
            status,
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_applies_form_defaults() {
        let profile = HouseholdProfile::builder("Ahmad", "33210001").build().unwrap();
        assert_eq!(profile.gender, Gender::Male);
        assert_eq!(profile.income, 0);
        assert_eq!(profile.dependents, 0);
        assert_eq!(profile.house_type, HouseType::Permanent);
        assert_eq!(profile.floor_type, FloorType::Tiled);
        assert!(!profile.health_issues);
        assert_eq!(profile.year, DEFAULT_ASSESSMENT_YEAR);
    }

    #[test]
    fn builder_rejects_blank_identity() {
        assert!(HouseholdProfile::builder("  ", "33210001").build().is_err());
        assert!(HouseholdProfile::builder("Ahmad", "").build().is_err());
    }

    #[test]
    fn builder_trims_fields() {
        let profile = HouseholdProfile::builder(" Ahmad ", " 33210001 ")
            .occupation(" Buruh Tani ")
            .build()
            .unwrap();
        assert_eq!(profile.name, "Ahmad");
        assert_eq!(profile.nik, "33210001");
        assert_eq!(profile.occupation, "Buruh Tani");
    }
}
