use spinalsense_core::{answer, entry_for, match_category, GuidanceCategory, SeverityTier};

const TRIGGER_WORDS: &[&str] = &[
    "exercise",
    "workout",
    "physical",
    "precaution",
    "warning",
    "avoid",
    "should i",
    "lifestyle",
    "daily",
    "posture",
    "routine",
    "diet",
    "nutrition",
    "eat",
    "food",
    "severity",
    "angle",
    "condition",
    "status",
];

#[test]
fn exercise_wins_over_diet_when_both_match() {
    let response = answer("what exercise and diet should I do?", "mild", "Alice");
    let mild = entry_for(SeverityTier::Mild);
    assert!(response.starts_with("**Recommended Exercises for mild scoliosis:**"));
    assert!(response.contains(mild.exercises));
    assert!(!response.contains("**Nutritional Guidance:**"));
}

#[test]
fn unknown_tier_falls_back_to_mild_guidance() {
    assert_eq!(
        answer("any exercise advice?", "unknown", "Bob"),
        answer("any exercise advice?", "mild", "Bob")
    );
}

#[test]
fn default_response_greets_user_without_trigger_words() {
    let response = answer("hello", "moderate", "Carol");
    assert!(response.contains("Carol"));
    assert!(response.contains("moderate"));
    let lowered = response.to_lowercase();
    for word in TRIGGER_WORDS {
        assert!(!lowered.contains(word), "default response contains `{word}`");
    }
}

#[test]
fn each_category_renders_its_tier_guidance() {
    let severe = entry_for(SeverityTier::Severe);

    let precaution = answer("Any WARNING signs?", "severe", "Eve");
    assert!(precaution.contains(severe.precautions));
    assert!(precaution.contains(severe.lifestyle));

    let diet = answer("best food for bones", "severe", "Eve");
    assert!(diet.starts_with("**Nutritional Guidance:**"));
    assert!(diet.contains(severe.diet));

    let status = answer("what is my status", "severe", "Eve");
    assert!(status.contains("You have severe scoliosis."));
    assert!(status.contains("Mild: < 25°"));
    assert!(status.contains("Moderate: 25-40°"));
    assert!(status.contains("Severe: > 40°"));
}

#[test]
fn match_category_follows_table_order() {
    assert_eq!(
        match_category("daily workout"),
        Some(GuidanceCategory::Exercise)
    );
    assert_eq!(
        match_category("nutrition and condition"),
        Some(GuidanceCategory::Diet)
    );
    assert_eq!(match_category("thanks"), None);
}

#[test]
fn tier_labels_must_match_exactly() {
    let mild = answer("any exercise advice?", "mild", "Bob");
    assert_eq!(answer("any exercise advice?", "Severe", "Bob"), mild);
    assert_eq!(answer("any exercise advice?", " MODERATE ", "Bob"), mild);
    assert_ne!(answer("any exercise advice?", "severe", "Bob"), mild);
}
