//! Keyword-driven guidance retrieval.
//!
//! # Responsibility
//! - Pick one guidance category for a query via an ordered rule table.
//! - Render the category template for the resolved severity tier.
//!
//! # Invariants
//! - Rules are evaluated in `CATEGORY_RULES` order; the first match wins.
//! - Matching is case-insensitive substring search on the query.
//! - Tier labels other than the exact lowercase ids resolve to `SeverityTier::Mild`.

use crate::knowledge::base::{entry_for, KnowledgeEntry};
use crate::model::severity::SeverityTier;

/// Guidance category selected by keyword rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuidanceCategory {
    Exercise,
    Precaution,
    Lifestyle,
    Diet,
    Status,
}

/// Ordered `(category, keywords)` dispatch table.
pub const CATEGORY_RULES: &[(GuidanceCategory, &[&str])] = &[
    (
        GuidanceCategory::Exercise,
        &["exercise", "workout", "physical"],
    ),
    (
        GuidanceCategory::Precaution,
        &["precaution", "warning", "avoid", "should i"],
    ),
    (
        GuidanceCategory::Lifestyle,
        &["lifestyle", "daily", "posture", "routine"],
    ),
    (GuidanceCategory::Diet, &["diet", "nutrition", "eat", "food"]),
    (
        GuidanceCategory::Status,
        &["severity", "angle", "condition", "status"],
    ),
];

/// Returns the first category whose keywords occur in `query`.
pub fn match_category(query: &str) -> Option<GuidanceCategory> {
    let lowered = query.to_lowercase();
    CATEGORY_RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| lowered.contains(kw)))
        .map(|(category, _)| *category)
}

/// Resolves a caller-provided tier label, falling back to mild.
pub fn resolve_tier(label: &str) -> SeverityTier {
    SeverityTier::parse(label).unwrap_or(SeverityTier::Mild)
}

/// Answers a free-text query with guidance for the given tier label.
pub fn answer(query: &str, tier_label: &str, user_name: &str) -> String {
    let tier = resolve_tier(tier_label);
    match match_category(query) {
        Some(category) => render_category(category, tier, entry_for(tier)),
        None => greeting(user_name, tier),
    }
}

fn greeting(user_name: &str, tier: SeverityTier) -> String {
    format!(
        "Hi {user_name}! I'm here to help you manage your {tier} scoliosis. What would you like to know?"
    )
}

fn render_category(category: GuidanceCategory, tier: SeverityTier, data: &KnowledgeEntry) -> String {
    match category {
        GuidanceCategory::Exercise => format!(
            "**Recommended Exercises for {tier} scoliosis:**\n\n{}\n\n⚠️ Always start slowly and consult a physical therapist before beginning any new routine.",
            data.exercises
        ),
        GuidanceCategory::Precaution => format!(
            "**Important Precautions:**\n{}\n\n**Lifestyle Tips:**\n{}\n\nAlways listen to your body and seek professional medical advice.",
            data.precautions, data.lifestyle
        ),
        GuidanceCategory::Lifestyle => format!(
            "**Daily Lifestyle Recommendations:**\n{}\n\n**Nutrition:**\n{}\n\n**Monitoring:**\n{}",
            data.lifestyle, data.diet, data.monitoring
        ),
        GuidanceCategory::Diet => format!(
            "**Nutritional Guidance:**\n{}\n\nConsider consulting a nutritionist for a personalized meal plan.",
            data.diet
        ),
        GuidanceCategory::Status => format!(
            "**Your Condition:**\nYou have {tier} scoliosis.\n\n**Cobb Angle Classifications:**\n- Mild: < 25°\n- Moderate: 25-40°\n- Severe: > 40°\n\nRegular monitoring is crucial for your health."
        ),
    }
}
