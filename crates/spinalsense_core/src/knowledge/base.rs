//! Per-tier guidance entries.
//!
//! Exactly three tiers, each with the same five categories.

use crate::model::severity::SeverityTier;

/// Guidance text for one severity tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnowledgeEntry {
    pub exercises: &'static str,
    pub precautions: &'static str,
    pub lifestyle: &'static str,
    pub diet: &'static str,
    pub monitoring: &'static str,
}

const MILD: KnowledgeEntry = KnowledgeEntry {
    exercises: "Swimming and water aerobics 3-4x weekly, Pilates 2-3x weekly, Yoga daily, Stretching 15-20 min daily, Walking 30 min daily",
    precautions: "Regular monitoring every 6-12 months. Avoid heavy lifting and high-impact sports.",
    lifestyle: "Maintain good posture, ergonomic workspace setup, take movement breaks every hour",
    diet: "Ensure adequate calcium and Vitamin D. Include anti-inflammatory foods.",
    monitoring: "Track any pain or discomfort. Schedule follow-up X-rays annually.",
};

const MODERATE: KnowledgeEntry = KnowledgeEntry {
    exercises: "Physical therapy 2x weekly, Core strengthening daily, Asymmetrical exercises 3x weekly, Gentle Pilates",
    precautions: "Consult orthopedist immediately. Bracing may be recommended. Avoid contact sports.",
    lifestyle: "Posture checks every 30 mins, proper sleeping position, controlled movements only",
    diet: "High in calcium, Vitamin D, and magnesium. Consult nutritionist.",
    monitoring: "Schedule X-rays every 6 months. Track symptoms closely.",
};

const SEVERE: KnowledgeEntry = KnowledgeEntry {
    exercises: "Physical therapy only as prescribed by specialist. Gentle stretching under supervision. Breathing exercises.",
    precautions: "URGENT: Surgical intervention may be necessary. Consult orthopedic surgeon immediately.",
    lifestyle: "Medical supervision required at all times. Avoid strenuous activities completely.",
    diet: "Balanced diet with adequate nutrients. Work with medical team.",
    monitoring: "Regular specialist consultations required. X-rays as recommended by doctor.",
};

/// Returns the guidance entry for `tier`.
pub fn entry_for(tier: SeverityTier) -> &'static KnowledgeEntry {
    match tier {
        SeverityTier::Mild => &MILD,
        SeverityTier::Moderate => &MODERATE,
        SeverityTier::Severe => &SEVERE,
    }
}

#[cfg(test)]
mod tests {
    use super::entry_for;
    use crate::model::severity::SeverityTier;

    #[test]
    fn every_tier_has_all_categories_populated() {
        for tier in SeverityTier::ALL {
            let entry = entry_for(tier);
            for text in [
                entry.exercises,
                entry.precautions,
                entry.lifestyle,
                entry.diet,
                entry.monitoring,
            ] {
                assert!(!text.trim().is_empty(), "{tier} has an empty category");
            }
        }
    }

    #[test]
    fn tiers_have_distinct_guidance() {
        assert_ne!(
            entry_for(SeverityTier::Mild),
            entry_for(SeverityTier::Severe)
        );
        assert!(entry_for(SeverityTier::Severe).precautions.starts_with("URGENT"));
    }
}
