//! Categorical types shared by the household models
//!
//! The canonical data labels are the Indonesian strings used by the village
//! registry (forms, master sheet, exports); the Rust identifiers describe the
//! same categories in code.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Gender of the registered head of household
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    /// "Laki-laki"
    #[serde(rename = "Laki-laki")]
    Male,
    /// "Perempuan"
    #[serde(rename = "Perempuan")]
    Female,
}

impl Gender {
    /// Get the canonical registry label for this gender
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Male => "Laki-laki",
            Self::Female => "Perempuan",
        }
    }

    /// Parse a registry label into a `Gender`
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "Laki-laki" => Some(Self::Male),
            "Perempuan" => Some(Self::Female),
            _ => None,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Wall construction of the family dwelling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HouseType {
    /// Brick or concrete construction ("Permanen")
    #[serde(rename = "Permanen")]
    Permanent,
    /// Mixed masonry and light construction ("Semi-Permanen")
    #[serde(rename = "Semi-Permanen")]
    SemiPermanent,
    /// Wood or bamboo construction ("Kayu/Bambu")
    #[serde(rename = "Kayu/Bambu")]
    WoodBamboo,
}

impl HouseType {
    /// Get the canonical registry label for this house type
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Permanent => "Permanen",
            Self::SemiPermanent => "Semi-Permanen",
            Self::WoodBamboo => "Kayu/Bambu",
        }
    }

    /// Parse a registry label into a `HouseType`
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "Permanen" => Some(Self::Permanent),
            "Semi-Permanen" => Some(Self::SemiPermanent),
            "Kayu/Bambu" => Some(Self::WoodBamboo),
            _ => None,
        }
    }
}

impl fmt::Display for HouseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Floor material of the family dwelling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FloorType {
    /// Tiled floor ("Ubin")
    #[serde(rename = "Ubin")]
    Tiled,
    /// Cement floor ("Semen")
    #[serde(rename = "Semen")]
    Cement,
    /// Bare earth floor ("Tanah")
    #[serde(rename = "Tanah")]
    Dirt,
}

impl FloorType {
    /// Get the canonical registry label for this floor type
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Tiled => "Ubin",
            Self::Cement => "Semen",
            Self::Dirt => "Tanah",
        }
    }

    /// Parse a registry label into a `FloorType`
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "Ubin" => Some(Self::Tiled),
            "Semen" => Some(Self::Cement),
            "Tanah" => Some(Self::Dirt),
            _ => None,
        }
    }
}

impl fmt::Display for FloorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Poverty status assigned by the classification rules
///
/// Variants are ordered by vulnerability, so `NotPoor < NearPoor < Poor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PovertyStatus {
    /// Income covers basic needs ("Tidak Miskin")
    #[serde(rename = "Tidak Miskin")]
    NotPoor = 1,
    /// At risk of falling below the poverty line ("Rentan Miskin")
    #[serde(rename = "Rentan Miskin")]
    NearPoor = 2,
    /// Below the poverty line ("Miskin")
    #[serde(rename = "Miskin")]
    Poor = 3,
}

impl PovertyStatus {
    /// Get the canonical registry label for this status
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::NotPoor => "Tidak Miskin",
            Self::NearPoor => "Rentan Miskin",
            Self::Poor => "Miskin",
        }
    }

    /// Parse a registry label into a `PovertyStatus`
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "Tidak Miskin" => Some(Self::NotPoor),
            "Rentan Miskin" => Some(Self::NearPoor),
            "Miskin" => Some(Self::Poor),
            _ => None,
        }
    }

    /// All statuses, from least to most vulnerable
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::NotPoor, Self::NearPoor, Self::Poor]
    }
}

impl fmt::Display for PovertyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
