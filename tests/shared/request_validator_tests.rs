use kidtrack_gateway::{
    live_tracking::interfaces::rest::resources::update_gps_request_resource::UpdateGpsRequestResource,
    ride_booking::interfaces::rest::resources::book_ride_request_resource::BookRideRequestResource,
    shared::interfaces::rest::request_validator::parse_payload,
};

#[test]
fn parses_well_formed_booking() {
    let request = parse_payload::<BookRideRequestResource>(
        br#"{"pickup_location":"A","dropoff_location":"B","schedule_date":"2025-01-01","user_id":"u1","extra":true}"#,
    )
    .expect("valid payload");

    assert_eq!(request.pickup_location, "A");
    assert_eq!(request.user_id, "u1");
}

#[test]
fn reports_body_that_is_not_json() {
    let error = parse_payload::<BookRideRequestResource>(b"pickup=A").expect_err("invalid");

    assert!(error.has_violation_for("body"));
    assert_eq!(error.violations()[0].message, "request body is not valid JSON");
}

#[test]
fn reports_body_that_is_not_an_object() {
    let error = parse_payload::<BookRideRequestResource>(b"[1,2]").expect_err("invalid");

    assert_eq!(error.violations()[0].message, "request body must be a JSON object");
}

#[test]
fn null_counts_as_missing() {
    let error = parse_payload::<BookRideRequestResource>(
        br#"{"pickup_location":null,"dropoff_location":"B","schedule_date":"d","user_id":"u1"}"#,
    )
    .expect_err("invalid");

    assert_eq!(error.violations().len(), 1);
    assert_eq!(error.violations()[0].field, "pickup_location");
    assert_eq!(error.violations()[0].message, "field required");
}

#[test]
fn reports_every_missing_field_of_empty_object() {
    let error = parse_payload::<UpdateGpsRequestResource>(b"{}").expect_err("invalid");

    assert!(error.has_violation_for("latitude"));
    assert!(error.has_violation_for("longitude"));
    assert!(error.has_violation_for("vehicle_id"));
    assert_eq!(
        error.to_string(),
        "Request validation failed: latitude: field required; longitude: field required; vehicle_id: field required"
    );
}

#[test]
fn numeric_strings_are_not_numbers() {
    let error = parse_payload::<UpdateGpsRequestResource>(
        br#"{"latitude":"1.5","longitude":2.5,"vehicle_id":"v1"}"#,
    )
    .expect_err("invalid");

    assert_eq!(error.violations().len(), 1);
    assert_eq!(error.violations()[0].message, "expected number");
}
