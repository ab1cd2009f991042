//! Tests for Gemini wire-format shapes.

use contentcraft_core::{GenerateRequest, Input, MediaInput};
use contentcraft_models::gemini::{
    GenerateContentResponse, ImageInstance, ImageParameters, PredictRequest, PredictResponse,
};
use serde_json::json;

#[test]
fn generate_request_serializes_camel_case_parts() {
    let req = GenerateRequest {
        inputs: vec![
            Input::Media(MediaInput {
                mime_type: "video/mp4".to_string(),
                data: "AAAA".to_string(),
            }),
            Input::Text("Analyze the content of this video.".to_string()),
        ],
        temperature: Some(0.7),
        max_tokens: Some(1024),
        model: None,
    };
    let body = contentcraft_models::gemini::conversion::to_generate_content_request(
        &req,
        Some(&json!({"type": "OBJECT"})),
    );
    let value = serde_json::to_value(&body).unwrap();

    let parts = &value["contents"][0]["parts"];
    assert_eq!(parts[0]["inlineData"]["mimeType"], "video/mp4");
    assert_eq!(parts[1]["text"], "Analyze the content of this video.");

    let config = &value["generationConfig"];
    assert_eq!(config["temperature"], 0.7);
    assert_eq!(config["maxOutputTokens"], 1024);
    assert_eq!(config["responseMimeType"], "application/json");
    assert_eq!(config["responseSchema"]["type"], "OBJECT");
}

#[test]
fn generate_response_extracts_trimmed_text() {
    let raw = json!({
        "candidates": [{
            "content": {
                "role": "model",
                "parts": [{"text": "  {\"LinkedIn\": {\"content\": \"hi\"}}  "}]
            },
            "finishReason": "STOP"
        }]
    });
    let response: GenerateContentResponse = serde_json::from_value(raw).unwrap();
    assert_eq!(
        response.text().unwrap(),
        "{\"LinkedIn\": {\"content\": \"hi\"}}"
    );
}

#[test]
fn generate_response_without_candidates_yields_none() {
    let response: GenerateContentResponse = serde_json::from_value(json!({})).unwrap();
    assert!(response.text().is_none());
}

#[test]
fn predict_request_serializes_camel_case_parameters() {
    let body = PredictRequest::new(
        vec![ImageInstance::new("a lighthouse")],
        ImageParameters::single("16:9"),
    );
    let value = serde_json::to_value(&body).unwrap();
    assert_eq!(value["instances"][0]["prompt"], "a lighthouse");
    assert_eq!(value["parameters"]["sampleCount"], 1);
    assert_eq!(value["parameters"]["aspectRatio"], "16:9");
}

#[test]
fn predict_response_tolerates_empty_predictions() {
    let response: PredictResponse = serde_json::from_value(json!({})).unwrap();
    assert!(response.predictions().is_empty());

    let response: PredictResponse = serde_json::from_value(json!({
        "predictions": [{"bytesBase64Encoded": "aGk=", "mimeType": "image/png"}]
    }))
    .unwrap();
    assert_eq!(
        response.predictions()[0].bytes_base64_encoded().as_deref(),
        Some("aGk=")
    );
}
