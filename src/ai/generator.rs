use std::collections::HashSet;

use schemars::schema_for;

use super::client::ModelApi;
use super::prompts;
use super::schema_utils;
use crate::error::GenerationError;
use crate::models::{GenerationResult, TestCase};

/// Turns a prompt into structured test cases with a single model call.
///
/// Callers are expected to have validated the prompt already; this type does
/// not re-validate. An empty array in the response is a legitimate outcome,
/// not a failure.
pub struct TestCaseGenerator<C: ModelApi> {
    client: C,
}

impl<C: ModelApi> TestCaseGenerator<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub async fn generate(&self, prompt: &str) -> Result<GenerationResult, GenerationError> {
        let raw_schema = schema_for!(Vec<TestCase>);
        let schema = schema_utils::clean_schema(raw_schema)?;

        let resp = self
            .client
            .generate(prompts::SYSTEM_PROMPT, &prompts::user_prompt(prompt), Some(schema))
            .await?;

        let cases: Vec<TestCase> = serde_json::from_str(&resp)
            .map_err(|e| GenerationError::Schema(format!("Test case parse failed: {e}")))?;

        // The response schema cannot express "non-empty string" or "ids are
        // unique", so enforce both here before the result reaches any caller.
        let mut seen_ids = HashSet::new();
        for (i, case) in cases.iter().enumerate() {
            if case.id.trim().is_empty()
                || case.description.trim().is_empty()
                || case.expected_result.trim().is_empty()
            {
                return Err(GenerationError::Schema(format!(
                    "Test case at index {i} has an empty required field"
                )));
            }
            if !seen_ids.insert(case.id.as_str()) {
                return Err(GenerationError::Schema(format!(
                    "Duplicate test case id {:?} at index {i}",
                    case.id
                )));
            }
        }

        Ok(GenerationResult { test_cases: cases })
    }
}
