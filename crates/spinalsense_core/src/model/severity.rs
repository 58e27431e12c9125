//! Severity tier classification.
//!
//! # Responsibility
//! - Map a Cobb-angle-equivalent measurement to one of three ordered tiers.
//! - Provide stable string ids used by boundary callers.
//!
//! # Invariants
//! - Thresholds are inclusive on the lower bound of each tier.
//! - Classification is pure and total.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Lower bound (inclusive) of the moderate tier, in degrees.
pub const MODERATE_THRESHOLD_DEGREES: f64 = 25.0;
/// Lower bound (inclusive) of the severe tier, in degrees.
pub const SEVERE_THRESHOLD_DEGREES: f64 = 40.0;

/// Ordered severity tier: `Mild < Moderate < Severe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeverityTier {
    Mild,
    Moderate,
    Severe,
}

impl SeverityTier {
    /// All tiers in ascending order.
    pub const ALL: [SeverityTier; 3] = [Self::Mild, Self::Moderate, Self::Severe];

    /// Classifies an angle in degrees.
    ///
    /// `< 25` is mild, `25..40` is moderate, `>= 40` is severe.
    pub fn classify(degrees: f64) -> Self {
        if degrees < MODERATE_THRESHOLD_DEGREES {
            Self::Mild
        } else if degrees < SEVERE_THRESHOLD_DEGREES {
            Self::Moderate
        } else {
            Self::Severe
        }
    }

    /// Parses an exact lowercase tier label.
    ///
    /// Returns `None` for anything else, including case or whitespace
    /// variants; callers decide the fallback.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "mild" => Some(Self::Mild),
            "moderate" => Some(Self::Moderate),
            "severe" => Some(Self::Severe),
            _ => None,
        }
    }

    /// Stable lowercase id used on the wire and in rendered guidance.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mild => "mild",
            Self::Moderate => "moderate",
            Self::Severe => "severe",
        }
    }
}

impl Display for SeverityTier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::SeverityTier;

    #[test]
    fn boundaries_are_inclusive_on_lower_bound() {
        assert_eq!(SeverityTier::classify(24.9), SeverityTier::Mild);
        assert_eq!(SeverityTier::classify(25.0), SeverityTier::Moderate);
        assert_eq!(SeverityTier::classify(39.9), SeverityTier::Moderate);
        assert_eq!(SeverityTier::classify(40.0), SeverityTier::Severe);
        assert_eq!(SeverityTier::classify(60.0), SeverityTier::Severe);
        assert_eq!(SeverityTier::classify(0.0), SeverityTier::Mild);
    }

    #[test]
    fn tiers_are_totally_ordered() {
        assert!(SeverityTier::Mild < SeverityTier::Moderate);
        assert!(SeverityTier::Moderate < SeverityTier::Severe);
    }

    #[test]
    fn parse_rejects_case_and_whitespace_variants() {
        assert_eq!(SeverityTier::parse("moderate"), Some(SeverityTier::Moderate));
        assert_eq!(SeverityTier::parse(" Moderate "), None);
        assert_eq!(SeverityTier::parse("SEVERE"), None);
        assert_eq!(SeverityTier::parse("severe "), None);
        assert_eq!(SeverityTier::parse("unknown"), None);
        assert_eq!(SeverityTier::parse(""), None);
    }

    #[test]
    fn as_str_round_trips_through_parse() {
        for tier in SeverityTier::ALL {
            assert_eq!(SeverityTier::parse(tier.as_str()), Some(tier));
        }
    }
}
