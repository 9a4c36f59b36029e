// Tests for the outbound schema declaration and the wire shape the UI sees.

use casegen::ai::schema_utils::clean_schema;
use casegen::models::{GenerationResult, TestCase};
use schemars::schema_for;

#[test]
fn test_cleaned_schema_declares_the_test_case_array() {
    let schema = clean_schema(schema_for!(Vec<TestCase>)).expect("schema must serialize");

    assert_eq!(schema["type"], "array");

    let props = &schema["items"]["properties"];
    for field in ["id", "description", "expected_result"] {
        assert_eq!(props[field]["type"], "string", "field {field}");
    }

    let required = schema["items"]["required"]
        .as_array()
        .expect("required must be present");
    for field in ["id", "description", "expected_result"] {
        assert!(required.iter().any(|v| v == field), "field {field}");
    }
}

#[test]
fn test_cleaned_schema_has_no_strict_mode_rejects() {
    let schema = clean_schema(schema_for!(Vec<TestCase>)).expect("schema must serialize");
    let dumped = serde_json::to_string(&schema).expect("schema must dump");

    assert!(!dumped.contains("$ref"));
    assert!(!dumped.contains("$schema"));
    assert!(!dumped.contains("\"definitions\""));
    assert!(!dumped.contains("additionalProperties"));
}

#[test]
fn test_generation_result_uses_camel_case_wire_key() {
    let result = GenerationResult {
        test_cases: vec![TestCase {
            id: "TC-001".to_string(),
            description: "desc".to_string(),
            expected_result: "result".to_string(),
        }],
    };

    let json = serde_json::to_value(&result).expect("result must serialize");
    assert!(json.get("testCases").is_some());
    assert_eq!(json["testCases"][0]["expected_result"], "result");
}

#[test]
fn test_empty_result_serializes_to_empty_array() {
    let json = serde_json::to_value(GenerationResult::empty()).expect("result must serialize");
    assert_eq!(json["testCases"], serde_json::json!([]));
}
