// Scripted stand-in for the Gemini transport.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use casegen::ai::client::ModelApi;
use casegen::error::GenerationError;
use serde_json::Value;

/// Returns a canned response (or failure) and counts calls, so tests can
/// assert that rejected prompts never reach the network.
pub struct MockModel {
    response: Result<String, String>,
    calls: AtomicUsize,
}

impl MockModel {
    #[allow(dead_code)]
    pub fn succeeding(body: &str) -> Arc<Self> {
        Arc::new(Self {
            response: Ok(body.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    #[allow(dead_code)]
    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            response: Err(message.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    #[allow(dead_code)]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ModelApi for MockModel {
    async fn generate(
        &self,
        _system_prompt: &str,
        _user_prompt: &str,
        _response_schema: Option<Value>,
    ) -> Result<String, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.response {
            Ok(body) => Ok(body.clone()),
            Err(msg) => Err(GenerationError::Model(msg.clone())),
        }
    }
}
