//! The village classification rule table
//!
//! The rules are an ordered cascade: entries are evaluated top to bottom and
//! the first match decides the status, so precedence is visible in the table
//! itself and each entry can be tested on its own. Thresholds come from the
//! village rule definitions; the attached sentences are the canonical wording
//! stored with every record.

use crate::models::{FloorType, HouseType, HouseholdProfile, PovertyStatus};

/// Monthly income at or below which a household is below the poverty line,
/// in rupiah ("≤800rb")
pub const POVERTY_LINE: u64 = 800_000;

/// Monthly income at or below which a household counts as low-income, in
/// rupiah
pub const VULNERABILITY_LINE: u64 = 1_000_000;

/// Dependent count at or above which the family burden counts as heavy
/// ("≥3 orang")
pub const HEAVY_DEPENDENT_BURDEN: u32 = 3;

/// One entry in the classification cascade
pub struct Rule {
    /// Short identifier for reports and tests
    pub name: &'static str,
    /// Status assigned when this rule is the first to match
    pub status: PovertyStatus,
    /// Sentence stored alongside the status
    pub reason: &'static str,
    /// Whether this rule matches the given profile
    pub applies: fn(&HouseholdProfile) -> bool,
}

/// Sentence attached when no rule matches
pub const SUFFICIENT_INCOME_REASON: &str =
    "Penghasilan mencukupi untuk kebutuhan dasar dengan jumlah tanggungan yang proporsional.";

/// The cascade, in precedence order
pub const RULES: &[Rule] = &[
    Rule {
        name: "very-low-income-heavy-burden",
        status: PovertyStatus::Poor,
        reason: "Penghasilan sangat rendah (≤800rb) disertai beban tanggungan keluarga yang banyak (≥3 orang).",
        applies: |p| p.income <= POVERTY_LINE && p.dependents >= HEAVY_DEPENDENT_BURDEN,
    },
    Rule {
        name: "very-low-income-unfit-housing",
        status: PovertyStatus::Poor,
        reason: "Penghasilan sangat rendah (≤800rb) dengan kondisi fisik rumah yang tidak layak huni.",
        applies: |p| p.income <= POVERTY_LINE && unfit_housing(p),
    },
    Rule {
        name: "very-low-income-chronic-illness",
        status: PovertyStatus::Poor,
        reason: "Penghasilan sangat rendah (≤800rb) disertai anggota keluarga dengan masalah kesehatan kronis.",
        applies: |p| p.income <= POVERTY_LINE && p.health_issues,
    },
    Rule {
        name: "below-poverty-line",
        status: PovertyStatus::NearPoor,
        reason: "Penghasilan di bawah garis kemiskinan, namun tanpa faktor pemberat dari tanggungan, rumah, maupun kesehatan.",
        applies: |p| p.income <= POVERTY_LINE,
    },
    Rule {
        name: "low-income-aggravated",
        status: PovertyStatus::NearPoor,
        reason: "Penghasilan rendah disertai kondisi rumah atau kesehatan yang menambah kerentanan keluarga.",
        applies: |p| p.income <= VULNERABILITY_LINE && (unfit_housing(p) || p.health_issues),
    },
    Rule {
        name: "low-income",
        status: PovertyStatus::NearPoor,
        reason: "Penghasilan rendah, namun beban keluarga dan kondisi fisik rumah masih dalam batas wajar.",
        applies: |p| p.income <= VULNERABILITY_LINE,
    },
];

/// Dwelling counts as unfit when walls are wood/bamboo or the floor is bare
/// earth
fn unfit_housing(profile: &HouseholdProfile) -> bool {
    profile.house_type == HouseType::WoodBamboo || profile.floor_type == FloorType::Dirt
}
