use screener_core::models::answer::AnswerValue;
use screener_core::models::screening::ScreeningRequest;
use screener_core::models::status::Status;

#[test]
fn parses_request_with_mixed_values() {
    let request = ScreeningRequest::from_json(
        r#"{
            "instrument": "phq9",
            "status": "started",
            "responses": { "q1": 2, "q2": null, "q3": "sometimes", "q4": 1.5 }
        }"#,
    )
    .unwrap();

    assert_eq!(request.instrument, "phq9");
    assert_eq!(request.status, Status::Started);
    assert!(request.id.is_none());
    assert_eq!(request.responses["q1"], Some(AnswerValue::Integer(2)));
    assert_eq!(request.responses["q2"], None);
    assert!(matches!(request.responses["q3"], Some(AnswerValue::Other(_))));
    assert!(matches!(request.responses["q4"], Some(AnswerValue::Other(_))));
}

#[test]
fn responses_default_to_empty() {
    let request =
        ScreeningRequest::from_json(r#"{ "instrument": "asrs", "status": "pending" }"#).unwrap();
    assert!(request.responses.is_empty());
}

#[test]
fn rejects_unknown_status() {
    let result =
        ScreeningRequest::from_json(r#"{ "instrument": "asrs", "status": "archived" }"#);
    assert!(result.is_err());
}
