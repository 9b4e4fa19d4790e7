//! Domain models for the household registry

pub mod household;
pub mod types;

pub use household::{Household, HouseholdBuilder, HouseholdProfile};
pub use types::{FloorType, Gender, HouseType, PovertyStatus};
