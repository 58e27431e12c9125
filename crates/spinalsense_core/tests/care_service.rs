use spinalsense_core::{
    Angle, CareService, FixedMeasurer, ServiceError, SeverityTier,
};

fn service_with_angle(tenths: u16) -> CareService {
    CareService::new(Box::new(FixedMeasurer::new(Angle::from_tenths(tenths))))
}

#[test]
fn create_session_rejects_empty_name() {
    let service = CareService::default();
    let err = service.create_session("  ").unwrap_err();
    assert!(matches!(err, ServiceError::InvalidRequest(_)));
}

#[test]
fn repeated_login_mints_distinct_identities_with_empty_histories() {
    let service = CareService::default();
    let first = service.create_session("Alice").unwrap();
    let second = service.create_session("Alice").unwrap();

    assert_ne!(first.user_id, second.user_id);
    assert!(service.list_scans(first.user_id.as_str()).is_empty());
    assert!(service.list_scans(second.user_id.as_str()).is_empty());
}

#[test]
fn record_scan_classifies_and_stores() {
    let service = service_with_angle(402);
    let session = service.create_session("Dana").unwrap();

    let outcome = service.record_scan(session.user_id.as_str(), b"xray").unwrap();
    assert_eq!(outcome.angle, 40.2);
    assert_eq!(outcome.severity, SeverityTier::Severe);

    let history = service.list_scans(session.user_id.as_str());
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].date_label, outcome.date_label);
    assert_eq!(
        service.current_severity(session.user_id.as_str()),
        Some(SeverityTier::Severe)
    );
}

#[test]
fn record_scan_rejects_empty_identity() {
    let service = service_with_angle(100);
    assert_eq!(
        service.record_scan("", &[]).unwrap_err(),
        ServiceError::InvalidRequest("user id required")
    );
}

#[test]
fn record_scan_accepts_unregistered_identity() {
    let service = service_with_angle(100);
    service.record_scan("user-external", &[]).unwrap();
    assert_eq!(service.list_scans("user-external").len(), 1);
}

#[test]
fn list_scans_for_unknown_identity_is_empty() {
    let service = CareService::default();
    assert!(service.list_scans("user-nobody").is_empty());
    assert!(service.list_scans("").is_empty());
}

#[test]
fn answer_query_validates_required_fields() {
    let service = CareService::default();
    assert!(service.answer_query("", "mild", "Alice").is_err());
    assert!(service.answer_query("exercise?", "", "Alice").is_err());

    let reply = service.answer_query("exercise?", "mild", "Alice").unwrap();
    assert!(reply.response.contains("Recommended Exercises"));
}

#[test]
fn whitespace_only_fields_are_not_missing() {
    let service = CareService::default();

    let reply = service.answer_query("   ", "moderate", "Carol").unwrap();
    assert!(reply.response.starts_with("Hi Carol!"));

    let reply = service.answer_query("exercise?", "  ", "Carol").unwrap();
    assert_eq!(
        reply,
        service.answer_query("exercise?", "mild", "Carol").unwrap()
    );
}

#[test]
fn responses_use_wire_field_names() {
    let service = service_with_angle(250);
    let session = service.create_session("Erin").unwrap();
    let login = serde_json::to_value(&session).unwrap();
    assert_eq!(login["userId"], session.user_id.as_str());
    assert_eq!(login["name"], "Erin");

    let outcome = service.record_scan(session.user_id.as_str(), &[]).unwrap();
    let scan = serde_json::to_value(&outcome).unwrap();
    assert_eq!(scan["cobbAngle"], 25.0);
    assert_eq!(scan["severity"], "moderate");
    assert!(scan["date"].is_string());

    let reply = service.answer_query("hi", "moderate", "Erin").unwrap();
    let chat = serde_json::to_value(&reply).unwrap();
    assert!(chat["response"].as_str().unwrap().contains("Erin"));
}
