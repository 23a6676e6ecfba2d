use super::*;
use records::EntityKind;

#[test]
fn collection_endpoint_uses_kind_slug() {
    assert_eq!(collection_endpoint(EntityKind::PromotionPower), "/api/records/promotion-powers");
}

#[test]
fn record_endpoint_appends_id() {
    assert_eq!(record_endpoint(EntityKind::Category, &RecordId::from("cat1")), "/api/records/categories/cat1");
}

#[test]
fn status_message_prefers_server_error_text() {
    assert_eq!(status_message(422, r#"{"error":"Ad name cannot be empty."}"#), "Ad name cannot be empty.");
}

#[test]
fn status_message_falls_back_on_unparseable_or_blank_body() {
    assert_eq!(status_message(500, "<html>oops</html>"), "request failed: 500");
    assert_eq!(status_message(502, r#"{"error":"  "}"#), "request failed: 502");
}

#[test]
fn status_error_displays_message_only() {
    let err = ApiError::Status { status: 403, message: "Incorrect old password.".into() };
    assert_eq!(err.to_string(), "Incorrect old password.");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn server_stub_reports_unavailable() {
    let result = futures::executor::block_on(RecordApi::<records::AdShowFields>::list(&HttpApi));
    assert_eq!(result, Err(ApiError::Network("not available on server".into())));
}
