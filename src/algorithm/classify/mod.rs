//! Poverty status classification
//!
//! This module implements the deterministic decision procedure that assigns a
//! poverty status and an explanatory sentence to a household profile. It is a
//! pure function over the profile: no state, no randomness, no I/O, safe to
//! call from any number of threads without coordination.

pub mod rules;

use serde::{Deserialize, Serialize};

use crate::models::{HouseholdProfile, PovertyStatus};
use rules::{RULES, SUFFICIENT_INCOME_REASON};

/// Outcome of classifying a household profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// Assigned poverty status
    pub status: PovertyStatus,
    /// Sentence naming the conditions that produced the status
    pub reason: String,
}

/// Classify a household profile into a poverty status with explanation
///
/// The rule table is walked in precedence order and the first matching entry
/// decides the outcome; a profile no rule matches is classified `NotPoor`.
/// Identical input always yields an identical result.
#[must_use]
pub fn classify(profile: &HouseholdProfile) -> Classification {
    match RULES.iter().find(|rule| (rule.applies)(profile)) {
        Some(rule) => Classification {
            status: rule.status,
            reason: rule.reason.to_string(),
        },
        None => Classification {
            status: PovertyStatus::NotPoor,
            reason: SUFFICIENT_INCOME_REASON.to_string(),
        },
    }
}
