use std::future::Future;
use std::time::Duration;

use serde_json::{Value, json};

use crate::config::Config;
use crate::error::GenerationError;

/// Seam between the generation flow and the hosted model transport, so tests
/// can substitute a scripted client for the real one.
pub trait ModelApi: Send + Sync {
    /// One structured-output completion. Each call is independent: no
    /// retries, no caching.
    fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        response_schema: Option<Value>,
    ) -> impl Future<Output = Result<String, GenerationError>> + Send;
}

/// Thin wrapper around the Gemini `generateContent` endpoint. Built once at
/// process start and shared by handle; the inner reqwest client pools
/// connections across requests.
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(60))
                .build()
                .unwrap_or_default(),
            api_key: config.gemini_api_key.clone(),
            model: config.gemini_model.clone(),
        }
    }
}

// Forwarding impl so a shared client handle can be used wherever the trait
// is expected (coherence requires this to live next to the trait).
impl<T: ModelApi> ModelApi for std::sync::Arc<T> {
    async fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        response_schema: Option<Value>,
    ) -> Result<String, GenerationError> {
        (**self).generate(system_prompt, user_prompt, response_schema).await
    }
}

impl ModelApi for GeminiClient {
    async fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        response_schema: Option<Value>,
    ) -> Result<String, GenerationError> {
        let url = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent?key={}",
            self.model, self.api_key
        );

        let full_prompt = format!("{system_prompt}\n\n{user_prompt}");

        let mut payload = json!({
            "contents": [{
                "parts": [{ "text": full_prompt }]
            }],
            "generationConfig": {
                "responseMimeType": "application/json"
            }
        });

        if let Some(schema) = response_schema {
            payload["generationConfig"]["responseSchema"] = schema;
        }

        let res = self.client.post(&url).json(&payload).send().await?;

        if !res.status().is_success() {
            let status = res.status();
            let err_text = res.text().await.unwrap_or_default();
            log::error!("Gemini API error {status}: {err_text}");
            return Err(GenerationError::Model(format!("API Error {status}: {err_text}")));
        }

        let body: Value = res.json().await?;

        let text = body["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .ok_or_else(|| GenerationError::Model("No text content returned".into()))?;

        Ok(clean_json_block(text))
    }
}

/// Strips a ```json fence if the model wrapped its output in one despite the
/// JSON mime type.
fn clean_json_block(text: &str) -> String {
    let start = text.find("```json").map(|i| i + 7).unwrap_or(0);
    let end = text.rfind("```").unwrap_or(text.len());
    text[start..end].trim().to_string()
}
