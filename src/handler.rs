use uuid::Uuid;

use crate::ai::client::ModelApi;
use crate::error::UnexpectedError;
use crate::flow::GenerationFlow;
use crate::models::{GenerationResult, PromptRequest};

/// Boundary toward the UI. Collapses every lower-layer failure into the one
/// opaque error kind so callers only ever need a single failure branch.
pub struct RequestHandler<C: ModelApi> {
    flow: GenerationFlow<C>,
}

impl<C: ModelApi> RequestHandler<C> {
    pub fn new(flow: GenerationFlow<C>) -> Self {
        Self { flow }
    }

    /// An absent prompt short-circuits before the flow is even consulted;
    /// a present-but-invalid one is the flow's business.
    ///
    /// `request_id` is the correlation id the inbound boundary logs under;
    /// the underlying cause of a failure is logged against it here and never
    /// surfaced to the caller.
    pub async fn handle(
        &self,
        request_id: Uuid,
        prompt: &str,
    ) -> Result<GenerationResult, UnexpectedError> {
        if prompt.is_empty() {
            return Ok(GenerationResult::empty());
        }

        match self
            .flow
            .run(PromptRequest { prompt: prompt.to_string() })
            .await
        {
            Ok(result) => Ok(result),
            Err(e) => {
                log::error!("[{request_id}] Generation failed: {e}");
                Err(UnexpectedError)
            }
        }
    }
}
