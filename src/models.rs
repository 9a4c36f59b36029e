use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One user submission. Created per request, consumed once, never stored.
#[derive(Debug, Deserialize)]
pub struct PromptRequest {
    pub prompt: String,
}

/// A single generated scenario. All three fields are required and non-empty
/// in any result that leaves the generator.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TestCase {
    #[schemars(description = "Short unique identifier, e.g. \"TC-001\".")]
    pub id: String,
    #[schemars(description = "What the scenario verifies.")]
    pub description: String,
    #[schemars(description = "The observable outcome when the scenario passes.")]
    pub expected_result: String,
}

/// The wire shape the UI consumes. An empty list is a valid outcome, either
/// "prompt rejected" or "model found nothing worth generating".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerationResult {
    #[serde(rename = "testCases")]
    pub test_cases: Vec<TestCase>,
}

impl GenerationResult {
    pub fn empty() -> Self {
        Self::default()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
