use super::*;

#[test]
fn predict_request_serializes_text_field() {
    let body = serde_json::to_value(PredictRequest { text: "fever" }).unwrap();
    assert_eq!(body, serde_json::json!({ "text": "fever" }));
}

#[test]
fn full_response_converts_to_result() {
    let resp: PredictionResponse = serde_json::from_str(
        r#"{"prediction":"Flu","alternates":["Flu","Cold"],"department":"General Medicine","extracted":{"fever":1}}"#,
    )
    .unwrap();
    assert!(resp.extracted.is_some());

    let result = PredictionResult::from(resp);
    assert_eq!(result.primary.as_deref(), Some("Flu"));
    assert_eq!(result.alternates, ["Flu", "Cold"]);
    assert_eq!(result.department.as_deref(), Some("General Medicine"));
    assert_eq!(result.error, None);
}

#[test]
fn missing_and_null_fields_default() {
    let resp: PredictionResponse = serde_json::from_str(r#"{"alternates":null,"error":"bad input"}"#).unwrap();
    let result = PredictionResult::from(resp);

    assert_eq!(result.primary, None);
    assert!(result.alternates.is_empty());
    assert_eq!(result.error.as_deref(), Some("bad input"));
}

#[test]
fn empty_strings_are_treated_as_absent() {
    let resp = PredictionResponse {
        prediction: Some(String::new()),
        alternates: Some(vec![String::new()]),
        department: Some("  ".into()),
        error: Some(String::new()),
        ..PredictionResponse::default()
    };
    assert_eq!(PredictionResult::from(resp), PredictionResult::default());
}

#[test]
fn non_object_body_fails_to_parse() {
    assert!(serde_json::from_str::<PredictionResponse>("\"oops\"").is_err());
}
