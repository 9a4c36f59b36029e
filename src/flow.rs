use crate::ai::client::ModelApi;
use crate::ai::generator::TestCaseGenerator;
use crate::error::GenerationError;
use crate::models::{GenerationResult, PromptRequest};
use crate::validate;

/// Validate-then-generate orchestration. Holds no state of its own between
/// transitions; the only suspension point is the model call inside the
/// generator.
pub struct GenerationFlow<C: ModelApi> {
    generator: TestCaseGenerator<C>,
}

impl<C: ModelApi> GenerationFlow<C> {
    pub fn new(generator: TestCaseGenerator<C>) -> Self {
        Self { generator }
    }

    /// An invalid prompt is not a failure: the flow completes with an empty
    /// result and never reaches the model.
    pub async fn run(&self, request: PromptRequest) -> Result<GenerationResult, GenerationError> {
        if !validate::validate(&request.prompt) {
            log::info!("Prompt rejected by validator, returning empty result");
            return Ok(GenerationResult::empty());
        }

        self.generator.generate(&request.prompt).await
    }
}
